use dealdesk_domain::{Deliverable, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableDTO {
    pub id: ID,
    pub deal_id: ID,
    pub title: String,
    pub due_date: Option<i64>,
    pub publish_date: Option<i64>,
    pub created: i64,
}

impl DeliverableDTO {
    pub fn new(deliverable: Deliverable) -> Self {
        Self {
            id: deliverable.id,
            deal_id: deliverable.deal_id,
            title: deliverable.title,
            due_date: deliverable.due_date,
            publish_date: deliverable.publish_date,
            created: deliverable.created,
        }
    }
}
