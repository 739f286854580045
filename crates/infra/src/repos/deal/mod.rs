mod inmemory;
mod postgres;

use dealdesk_domain::{Deal, ID};
pub use inmemory::InMemoryDealRepo;
pub use postgres::PostgresDealRepo;

/// Deals are owned by the CRM, the reminder pipeline only looks them up
#[async_trait::async_trait]
pub trait IDealRepo: Send + Sync {
    async fn insert(&self, deal: &Deal) -> anyhow::Result<()>;
    async fn find_by_tenant_id(&self, deal_id: &ID, tenant_id: &ID) -> Option<Deal>;
}
