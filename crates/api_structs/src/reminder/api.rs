use crate::dtos::ReminderDTO;
use dealdesk_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

pub mod get_deal_reminders {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub deal_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
