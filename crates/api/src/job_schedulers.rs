use crate::{reminder::CheckRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::interval;
use dealdesk_domain::{JobKind, RepeatableJob};
use dealdesk_infra::DealdeskContext;
use std::time::Duration;
use tracing::{error, info};

/// Registers the repeatable jobs on the job queue. Safe to call on every
/// start, an already registered job keeps its schedule.
pub async fn register_job_schedulers(ctx: &DealdeskContext) -> anyhow::Result<()> {
    let now = ctx.sys.get_timestamp_millis();
    let job = RepeatableJob::new(
        JobKind::CheckReminders,
        ctx.config.reminder_check_interval_millis,
        now,
    );
    if !job.is_valid() {
        return Err(anyhow::anyhow!(
            "Repeatable job {} needs a positive interval, got {} ms",
            job.kind,
            job.every_millis
        ));
    }
    if ctx.repos.repeatable_jobs.register(&job).await? {
        info!(
            "Registered repeatable job {} every {} ms",
            job.kind, job.every_millis
        );
    } else {
        info!("Repeatable job {} already registered", job.kind);
    }
    Ok(())
}

/// Polls the job queue and runs due jobs inline, so a process never runs
/// two jobs at the same time
pub fn start_job_queue_consumer(ctx: DealdeskContext) {
    actix_web::rt::spawn(async move {
        let poll_interval = ctx.config.queue_poll_interval_millis.max(1);
        let mut interval = interval(Duration::from_millis(poll_interval));
        loop {
            interval.tick().await;
            run_due_jobs(&ctx).await;
        }
    });
}

/// Claims and runs every job due now. Returns the jobs that ran.
pub async fn run_due_jobs(ctx: &DealdeskContext) -> Vec<JobKind> {
    let now = ctx.sys.get_timestamp_millis();
    let jobs = match ctx.repos.repeatable_jobs.claim_due(now).await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Unable to claim due jobs: {:?}", e);
            return vec![];
        }
    };

    for job in &jobs {
        run_job(job.kind, ctx).await;
    }
    jobs.into_iter().map(|job| job.kind).collect()
}

async fn run_job(kind: JobKind, ctx: &DealdeskContext) {
    match kind {
        JobKind::CheckReminders => {
            // Errors are logged by execute and the job fires again next period
            let _ = execute(CheckRemindersUseCase {}, ctx).await;
        }
    }
}
