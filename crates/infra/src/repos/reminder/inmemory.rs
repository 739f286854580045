use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::{Reminder, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        bulk_insert(reminders, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_deal(&self, tenant_id: &ID, deal_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| {
            r.tenant_id == *tenant_id && r.deal_id == *deal_id
        });
        reminders.sort_by_key(|r| r.scheduled_for);
        Ok(reminders)
    }

    async fn find_due(
        &self,
        now: i64,
        stale_claim_before: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| {
            r.is_claimable(now, stale_claim_before)
        });
        reminders.sort_by_key(|r| r.retry_order());
        reminders.truncate(limit);
        Ok(reminders)
    }

    async fn claim(
        &self,
        reminder: &Reminder,
        now: i64,
        stale_claim_before: i64,
    ) -> anyhow::Result<Option<Reminder>> {
        Ok(update_one_if(
            &reminder.id,
            &self.reminders,
            |r| r.version == reminder.version && r.is_claimable(now, stale_claim_before),
            |r| r.claim(now),
        ))
    }

    async fn release(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool> {
        Ok(update_one_if(
            &claimed.id,
            &self.reminders,
            |r| r.version == claimed.version && r.status == ReminderStatus::Processing,
            |r| r.release(now),
        )
        .is_some())
    }

    async fn defer(&self, reminder: &Reminder, now: i64) -> anyhow::Result<bool> {
        Ok(update_one_if(
            &reminder.id,
            &self.reminders,
            |r| r.version == reminder.version && !r.status.is_terminal(),
            |r| r.defer(now),
        )
        .is_some())
    }

    async fn mark_sent(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool> {
        Ok(update_one_if(
            &claimed.id,
            &self.reminders,
            |r| r.version == claimed.version && r.status == ReminderStatus::Processing,
            |r| r.mark_sent(now),
        )
        .is_some())
    }

    async fn cancel(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        Ok(update_one_if(
            &reminder.id,
            &self.reminders,
            |r| r.version == reminder.version && !r.status.is_terminal(),
            |r| r.cancel(),
        )
        .is_some())
    }
}
