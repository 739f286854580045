use super::IDealRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::{Deal, ID};

pub struct InMemoryDealRepo {
    deals: std::sync::Mutex<Vec<Deal>>,
}

impl InMemoryDealRepo {
    pub fn new() -> Self {
        Self {
            deals: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IDealRepo for InMemoryDealRepo {
    async fn insert(&self, deal: &Deal) -> anyhow::Result<()> {
        insert(deal, &self.deals);
        Ok(())
    }

    async fn find_by_tenant_id(&self, deal_id: &ID, tenant_id: &ID) -> Option<Deal> {
        find_by(&self.deals, |d| d.id == *deal_id && d.tenant_id == *tenant_id)
            .into_iter()
            .next()
    }
}
