mod deal;
mod deliverable;
mod notification;
mod payment;
mod reminder;
mod repeatable_job;
mod shared;
mod user;

pub use deal::IDealRepo;
use deal::{InMemoryDealRepo, PostgresDealRepo};
pub use deliverable::IDeliverableRepo;
use deliverable::{InMemoryDeliverableRepo, PostgresDeliverableRepo};
pub use notification::INotificationRepo;
use notification::{InMemoryNotificationRepo, PostgresNotificationRepo};
pub use payment::IPaymentRepo;
use payment::{InMemoryPaymentRepo, PostgresPaymentRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use repeatable_job::IRepeatableJobRepo;
use repeatable_job::{InMemoryRepeatableJobRepo, PostgresRepeatableJobRepo};
pub use shared::query_structs::*;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub deals: Arc<dyn IDealRepo>,
    pub deliverables: Arc<dyn IDeliverableRepo>,
    pub payments: Arc<dyn IPaymentRepo>,
    pub repeatable_jobs: Arc<dyn IRepeatableJobRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            deals: Arc::new(PostgresDealRepo::new(pool.clone())),
            deliverables: Arc::new(PostgresDeliverableRepo::new(pool.clone())),
            payments: Arc::new(PostgresPaymentRepo::new(pool.clone())),
            repeatable_jobs: Arc::new(PostgresRepeatableJobRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            deals: Arc::new(InMemoryDealRepo::new()),
            deliverables: Arc::new(InMemoryDeliverableRepo::new()),
            payments: Arc::new(InMemoryPaymentRepo::new()),
            repeatable_jobs: Arc::new(InMemoryRepeatableJobRepo::new()),
        }
    }
}
