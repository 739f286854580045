mod inmemory;
mod postgres;

use dealdesk_domain::{Reminder, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

/// Storage of `Reminder`s.
///
/// Every state transition is a conditional single row update keyed by the
/// reminder id and its `version`, so concurrent workers never both dispatch
/// the same `Reminder`.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_deal(&self, tenant_id: &ID, deal_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    /// Pending reminders with `scheduled_for <= now` together with
    /// `Processing` reminders claimed at or before `stale_claim_before`,
    /// at most `limit` of them. Reminders never attempted come first, oldest
    /// first, followed by earlier attempts in the order they were attempted.
    async fn find_due(
        &self,
        now: i64,
        stale_claim_before: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<Reminder>>;
    /// Moves the reminder to `Processing` if it is still claimable and still has
    /// the `version` of the given reminder. Returns the claimed reminder, or
    /// `None` if another worker got there first.
    async fn claim(
        &self,
        reminder: &Reminder,
        now: i64,
        stale_claim_before: i64,
    ) -> anyhow::Result<Option<Reminder>>;
    /// `Processing` -> `Pending` for a reminder claimed by this worker
    async fn release(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool>;
    /// Records an attempt that left the reminder undelivered without
    /// claiming it
    async fn defer(&self, reminder: &Reminder, now: i64) -> anyhow::Result<bool>;
    /// `Processing` -> `Sent` for a reminder claimed by this worker
    async fn mark_sent(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool>;
    /// Cancels a reminder which has not reached a terminal state and still
    /// has the given version
    async fn cancel(&self, reminder: &Reminder) -> anyhow::Result<bool>;
}
