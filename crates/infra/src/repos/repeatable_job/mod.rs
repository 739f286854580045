mod inmemory;
mod postgres;

use dealdesk_domain::RepeatableJob;
pub use inmemory::InMemoryRepeatableJobRepo;
pub use postgres::PostgresRepeatableJobRepo;

/// Durable schedule of the job queue
#[async_trait::async_trait]
pub trait IRepeatableJobRepo: Send + Sync {
    /// Stores the job unless a job with the same name and interval already
    /// exists, in which case the existing schedule is kept. Jobs with the same
    /// name but another interval are replaced. Returns true if the job was
    /// inserted.
    async fn register(&self, job: &RepeatableJob) -> anyhow::Result<bool>;
    async fn find_all(&self) -> anyhow::Result<Vec<RepeatableJob>>;
    /// Atomically takes every job due at `now` and moves it to its next run.
    /// A due period is handed out to exactly one caller.
    async fn claim_due(&self, now: i64) -> anyhow::Result<Vec<RepeatableJob>>;
}
