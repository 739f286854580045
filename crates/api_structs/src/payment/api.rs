use crate::dtos::PaymentDTO;
use dealdesk_domain::{Payment, ID};
use serde::{Deserialize, Serialize};

pub mod create_payment {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub deal_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// In the minor unit of the currency
        pub amount: i64,
        pub currency: String,
        pub due_date: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub payment: PaymentDTO,
    }

    impl APIResponse {
        pub fn new(payment: Payment) -> Self {
            Self {
                payment: PaymentDTO::new(payment),
            }
        }
    }
}
