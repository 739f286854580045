use crate::dtos::DeliverableDTO;
use dealdesk_domain::{Deliverable, ID};
use serde::{Deserialize, Serialize};

pub mod create_deliverable {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub deal_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub due_date: Option<i64>,
        #[serde(default)]
        pub publish_date: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deliverable: DeliverableDTO,
    }

    impl APIResponse {
        pub fn new(deliverable: Deliverable) -> Self {
            Self {
                deliverable: DeliverableDTO::new(deliverable),
            }
        }
    }
}
