use super::IRepeatableJobRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::RepeatableJob;

pub struct InMemoryRepeatableJobRepo {
    jobs: std::sync::Mutex<Vec<RepeatableJob>>,
}

impl InMemoryRepeatableJobRepo {
    pub fn new() -> Self {
        Self {
            jobs: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IRepeatableJobRepo for InMemoryRepeatableJobRepo {
    async fn register(&self, job: &RepeatableJob) -> anyhow::Result<bool> {
        if !job.is_valid() {
            return Err(anyhow::anyhow!(
                "Invalid interval {} for job {}",
                job.every_millis,
                job.kind
            ));
        }
        let mut jobs = lock(&self.jobs);
        jobs.retain(|j| j.kind != job.kind || j.every_millis == job.every_millis);
        if jobs.iter().any(|j| j.kind == job.kind) {
            return Ok(false);
        }
        jobs.push(job.clone());
        Ok(true)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<RepeatableJob>> {
        Ok(find_by(&self.jobs, |_| true))
    }

    async fn claim_due(&self, now: i64) -> anyhow::Result<Vec<RepeatableJob>> {
        Ok(update_many(&self.jobs, |j| j.is_due(now), |j| j.advance(now)))
    }
}
