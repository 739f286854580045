use crate::{APIResponse, BaseClient};
use dealdesk_api_structs::*;
use dealdesk_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DealClient {
    base: Arc<BaseClient>,
}

pub struct CreateDeliverableInput {
    pub deal_id: ID,
    pub title: String,
    pub due_date: Option<i64>,
    pub publish_date: Option<i64>,
}

pub struct CreatePaymentInput {
    pub deal_id: ID,
    pub amount: i64,
    pub currency: String,
    pub due_date: Option<i64>,
}

impl DealClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create_deliverable(
        &self,
        input: CreateDeliverableInput,
    ) -> APIResponse<create_deliverable::APIResponse> {
        let body = create_deliverable::RequestBody {
            title: input.title,
            due_date: input.due_date,
            publish_date: input.publish_date,
        };
        self.base
            .post(
                body,
                format!("deals/{}/deliverables", input.deal_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn create_payment(
        &self,
        input: CreatePaymentInput,
    ) -> APIResponse<create_payment::APIResponse> {
        let body = create_payment::RequestBody {
            amount: input.amount,
            currency: input.currency,
            due_date: input.due_date,
        };
        self.base
            .post(
                body,
                format!("deals/{}/payments", input.deal_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get_reminders(
        &self,
        deal_id: ID,
    ) -> APIResponse<get_deal_reminders::APIResponse> {
        self.base
            .get(format!("deals/{}/reminders", deal_id), StatusCode::OK)
            .await
    }
}
