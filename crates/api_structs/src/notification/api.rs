use crate::dtos::NotificationDTO;
use dealdesk_domain::{Notification, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification: NotificationDTO,
}

impl NotificationResponse {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification: NotificationDTO::new(notification),
        }
    }
}

pub mod get_notifications {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub unread: Option<bool>,
        pub skip: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationDTO>,
    }

    impl APIResponse {
        pub fn new(notifications: Vec<Notification>) -> Self {
            Self {
                notifications: notifications
                    .into_iter()
                    .map(NotificationDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod get_unread_count {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub count: i64,
    }
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod mark_all_notifications_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub updated: u64,
    }
}
