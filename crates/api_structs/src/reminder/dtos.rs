use dealdesk_domain::{Reminder, ReminderChannel, ReminderKind, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub deal_id: ID,
    pub kind: ReminderKind,
    pub channel: ReminderChannel,
    pub scheduled_for: i64,
    pub status: ReminderStatus,
    pub sent_at: Option<i64>,
    pub created: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            deal_id: reminder.deal_id,
            kind: reminder.kind,
            channel: reminder.channel,
            scheduled_for: reminder.scheduled_for,
            status: reminder.status,
            sent_at: reminder.sent_at,
            created: reminder.created,
        }
    }
}
