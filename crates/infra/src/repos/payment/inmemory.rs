use super::IPaymentRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::{Payment, ID};

pub struct InMemoryPaymentRepo {
    payments: std::sync::Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepo {
    pub fn new() -> Self {
        Self {
            payments: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IPaymentRepo for InMemoryPaymentRepo {
    async fn insert(&self, payment: &Payment) -> anyhow::Result<()> {
        insert(payment, &self.payments);
        Ok(())
    }

    async fn find(&self, payment_id: &ID) -> Option<Payment> {
        find(payment_id, &self.payments)
    }
}
