mod inmemory;
mod postgres;

use dealdesk_domain::{Deliverable, ID};
pub use inmemory::InMemoryDeliverableRepo;
pub use postgres::PostgresDeliverableRepo;

#[async_trait::async_trait]
pub trait IDeliverableRepo: Send + Sync {
    async fn insert(&self, deliverable: &Deliverable) -> anyhow::Result<()>;
    async fn find(&self, deliverable_id: &ID) -> Option<Deliverable>;
}
