use super::IDeliverableRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::{Deliverable, ID};

pub struct InMemoryDeliverableRepo {
    deliverables: std::sync::Mutex<Vec<Deliverable>>,
}

impl InMemoryDeliverableRepo {
    pub fn new() -> Self {
        Self {
            deliverables: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IDeliverableRepo for InMemoryDeliverableRepo {
    async fn insert(&self, deliverable: &Deliverable) -> anyhow::Result<()> {
        insert(deliverable, &self.deliverables);
        Ok(())
    }

    async fn find(&self, deliverable_id: &ID) -> Option<Deliverable> {
        find(deliverable_id, &self.deliverables)
    }
}
