use dealdesk_domain::{Notification, Reminder, ID};
use dealdesk_infra::{INotificationRepo, IReminderRepo, NotificationQuery};

fn unavailable<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("Storage unavailable"))
}

/// Reminder storage which is down
pub struct FailingReminderRepo {}

#[async_trait::async_trait]
impl IReminderRepo for FailingReminderRepo {
    async fn bulk_insert(&self, _reminders: &[Reminder]) -> anyhow::Result<()> {
        unavailable()
    }

    async fn find(&self, _reminder_id: &ID) -> Option<Reminder> {
        None
    }

    async fn find_by_deal(&self, _tenant_id: &ID, _deal_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        unavailable()
    }

    async fn find_due(
        &self,
        _now: i64,
        _stale_claim_before: i64,
        _limit: usize,
    ) -> anyhow::Result<Vec<Reminder>> {
        unavailable()
    }

    async fn claim(
        &self,
        _reminder: &Reminder,
        _now: i64,
        _stale_claim_before: i64,
    ) -> anyhow::Result<Option<Reminder>> {
        unavailable()
    }

    async fn release(&self, _claimed: &Reminder, _now: i64) -> anyhow::Result<bool> {
        unavailable()
    }

    async fn defer(&self, _reminder: &Reminder, _now: i64) -> anyhow::Result<bool> {
        unavailable()
    }

    async fn mark_sent(&self, _claimed: &Reminder, _now: i64) -> anyhow::Result<bool> {
        unavailable()
    }

    async fn cancel(&self, _reminder: &Reminder) -> anyhow::Result<bool> {
        unavailable()
    }
}

/// Notification storage that rejects every write
pub struct FailingNotificationRepo {}

#[async_trait::async_trait]
impl INotificationRepo for FailingNotificationRepo {
    async fn insert(&self, _notification: &Notification) -> anyhow::Result<()> {
        unavailable()
    }

    async fn find(&self, _notification_id: &ID) -> Option<Notification> {
        None
    }

    async fn find_by_user(&self, _query: NotificationQuery) -> anyhow::Result<Vec<Notification>> {
        unavailable()
    }

    async fn count_unread(&self, _tenant_id: &ID, _user_id: &ID) -> anyhow::Result<i64> {
        unavailable()
    }

    async fn mark_read(
        &self,
        _tenant_id: &ID,
        _user_id: &ID,
        _notification_id: &ID,
        _now: i64,
    ) -> anyhow::Result<Option<Notification>> {
        unavailable()
    }

    async fn mark_all_read(&self, _tenant_id: &ID, _user_id: &ID, _now: i64) -> anyhow::Result<u64> {
        unavailable()
    }
}
