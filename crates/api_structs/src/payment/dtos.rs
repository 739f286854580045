use dealdesk_domain::{Payment, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDTO {
    pub id: ID,
    pub deal_id: ID,
    pub amount: i64,
    pub currency: String,
    pub due_date: Option<i64>,
    pub created: i64,
}

impl PaymentDTO {
    pub fn new(payment: Payment) -> Self {
        Self {
            id: payment.id,
            deal_id: payment.deal_id,
            amount: payment.amount,
            currency: payment.currency,
            due_date: payment.due_date,
            created: payment.created,
        }
    }
}
