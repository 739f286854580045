mod inmemory;
mod postgres;

use dealdesk_domain::{Payment, ID};
pub use inmemory::InMemoryPaymentRepo;
pub use postgres::PostgresPaymentRepo;

#[async_trait::async_trait]
pub trait IPaymentRepo: Send + Sync {
    async fn insert(&self, payment: &Payment) -> anyhow::Result<()>;
    async fn find(&self, payment_id: &ID) -> Option<Payment>;
}
