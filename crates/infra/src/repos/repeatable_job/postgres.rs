use super::IRepeatableJobRepo;
use dealdesk_domain::RepeatableJob;
use sqlx::{FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresRepeatableJobRepo {
    pool: PgPool,
}

impl PostgresRepeatableJobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RepeatableJobRaw {
    name: String,
    every_millis: i64,
    next_run_at: i64,
    last_run_at: Option<i64>,
}

impl TryFrom<RepeatableJobRaw> for RepeatableJob {
    type Error = anyhow::Error;

    fn try_from(raw: RepeatableJobRaw) -> Result<Self, Self::Error> {
        Ok(RepeatableJob {
            kind: raw.name.parse()?,
            every_millis: raw.every_millis,
            next_run_at: raw.next_run_at,
            last_run_at: raw.last_run_at,
        })
    }
}

/// Jobs registered by another version of the service may be unknown here
fn into_domain(rows: Vec<RepeatableJobRaw>) -> Vec<RepeatableJob> {
    rows.into_iter()
        .filter_map(|raw| {
            let name = raw.name.clone();
            match RepeatableJob::try_from(raw) {
                Ok(job) => Some(job),
                Err(e) => {
                    error!("Unable to decode repeatable job {}. Err: {:?}", name, e);
                    None
                }
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IRepeatableJobRepo for PostgresRepeatableJobRepo {
    async fn register(&self, job: &RepeatableJob) -> anyhow::Result<bool> {
        if !job.is_valid() {
            return Err(anyhow::anyhow!(
                "Invalid interval {} for job {}",
                job.every_millis,
                job.kind
            ));
        }
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            DELETE FROM repeatable_jobs AS j
            WHERE j.name = $1 AND j.every_millis <> $2
            "#,
        )
        .bind(job.kind.name())
        .bind(job.every_millis)
        .execute(&mut *tx)
        .await?;
        let res = sqlx::query(
            r#"
            INSERT INTO repeatable_jobs(name, every_millis, next_run_at, last_run_at)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (name, every_millis) DO NOTHING
            "#,
        )
        .bind(job.kind.name())
        .bind(job.every_millis)
        .bind(job.next_run_at)
        .bind(job.last_run_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(res.rows_affected() == 1)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<RepeatableJob>> {
        let rows: Vec<RepeatableJobRaw> = sqlx::query_as(
            r#"
            SELECT * FROM repeatable_jobs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(into_domain(rows))
    }

    async fn claim_due(&self, now: i64) -> anyhow::Result<Vec<RepeatableJob>> {
        // Concurrent consumers re-check the WHERE clause on the updated row,
        // so the loser sees the advanced next_run_at and claims nothing.
        let rows: Vec<RepeatableJobRaw> = sqlx::query_as(
            r#"
            UPDATE repeatable_jobs AS j
            SET last_run_at = $1,
                next_run_at = j.next_run_at + ((($1 - j.next_run_at) / j.every_millis) + 1) * j.every_millis
            WHERE j.next_run_at <= $1
            RETURNING *
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(into_domain(rows))
    }
}
