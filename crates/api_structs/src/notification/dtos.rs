use dealdesk_domain::{Notification, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub body: String,
    pub read_at: Option<i64>,
    pub created: i64,
}

impl NotificationDTO {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            title: notification.title,
            body: notification.body,
            read_at: notification.read_at,
            created: notification.created,
        }
    }
}
