mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailConfig};
pub use repos::*;
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct DealdeskContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub email: Arc<dyn IEmailSender>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl DealdeskContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                warn!("DATABASE_URL is not set, data is kept in memory and lost on restart");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let email: Arc<dyn IEmailSender> = match &config.email {
            Some(email_config) => {
                info!("Sending reminder emails through {}", email_config.api_url);
                Arc::new(HttpEmailSender::new(email_config.clone()))
            }
            None => Arc::new(LogEmailSender {}),
        };
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            email,
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            email: Arc::new(LogEmailSender {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<DealdeskContext> {
    DealdeskContext::create(ContextParams {
        postgres_connection_string: std::env::var("DATABASE_URL").ok(),
    })
    .await
}
