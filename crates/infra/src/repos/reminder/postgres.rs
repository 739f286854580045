use super::IReminderRepo;
use dealdesk_domain::{Reminder, ReminderChannel, ReminderKind, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    tenant_uid: Uuid,
    deal_uid: Uuid,
    kind: String,
    channel: String,
    scheduled_for: i64,
    status: String,
    version: i64,
    claimed_at: Option<i64>,
    last_attempt_at: Option<i64>,
    sent_at: Option<i64>,
    created: i64,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> Result<Self, Self::Error> {
        Ok(Reminder {
            id: raw.reminder_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            deal_id: raw.deal_uid.into(),
            kind: raw.kind.parse()?,
            channel: raw.channel.parse()?,
            scheduled_for: raw.scheduled_for,
            status: raw.status.parse()?,
            version: raw.version,
            claimed_at: raw.claimed_at,
            last_attempt_at: raw.last_attempt_at,
            sent_at: raw.sent_at,
            created: raw.created,
        })
    }
}

/// Rows that cannot be decoded are logged and left out. They stay in the
/// table untouched so that nothing is dispatched from a corrupt record.
fn into_domain(rows: Vec<ReminderRaw>) -> Vec<Reminder> {
    rows.into_iter()
        .filter_map(|raw| {
            let reminder_uid = raw.reminder_uid;
            match Reminder::try_from(raw) {
                Ok(reminder) => Some(reminder),
                Err(e) => {
                    error!("Unable to decode reminder {}. Err: {:?}", reminder_uid, e);
                    None
                }
            }
        })
        .collect()
}

fn known_values<T>(variants: &[T], as_str: fn(&T) -> &'static str) -> Vec<String> {
    variants.iter().map(|v| as_str(v).to_string()).collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        for reminder in reminders {
            sqlx::query(
                r#"
            INSERT INTO reminders
            (reminder_uid, tenant_uid, deal_uid, kind, channel, scheduled_for, status, version, claimed_at, last_attempt_at, sent_at, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
            )
            .bind(reminder.id.inner_ref())
            .bind(reminder.tenant_id.inner_ref())
            .bind(reminder.deal_id.inner_ref())
            .bind(reminder.kind.as_str())
            .bind(reminder.channel.as_str())
            .bind(reminder.scheduled_for)
            .bind(reminder.status.as_str())
            .bind(reminder.version)
            .bind(reminder.claimed_at)
            .bind(reminder.last_attempt_at)
            .bind(reminder.sent_at)
            .bind(reminder.created)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let raw: ReminderRaw = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        into_domain(vec![raw]).pop()
    }

    async fn find_by_deal(&self, tenant_id: &ID, deal_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let rows: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.tenant_uid = $1 AND r.deal_uid = $2
            ORDER BY r.scheduled_for ASC
            "#,
        )
        .bind(tenant_id.inner_ref())
        .bind(deal_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(into_domain(rows))
    }

    async fn find_due(
        &self,
        now: i64,
        stale_claim_before: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<Reminder>> {
        let rows: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.scheduled_for <= $1
            AND (
                r.status = 'PENDING'
                OR (r.status = 'PROCESSING' AND (r.claimed_at IS NULL OR r.claimed_at <= $2))
            )
            AND r.kind = ANY($4)
            AND r.channel = ANY($5)
            ORDER BY r.last_attempt_at ASC NULLS FIRST, r.scheduled_for ASC
            LIMIT $3
            "#,
        )
        .bind(now)
        .bind(stale_claim_before)
        .bind(limit as i64)
        // Rows this version cannot decode must not take up batch slots
        .bind(known_values(&ReminderKind::ALL, ReminderKind::as_str))
        .bind(known_values(&ReminderChannel::ALL, ReminderChannel::as_str))
        .fetch_all(&self.pool)
        .await?;
        Ok(into_domain(rows))
    }

    async fn claim(
        &self,
        reminder: &Reminder,
        now: i64,
        stale_claim_before: i64,
    ) -> anyhow::Result<Option<Reminder>> {
        let raw: Option<ReminderRaw> = sqlx::query_as(
            r#"
            UPDATE reminders AS r
            SET status = 'PROCESSING', claimed_at = $3, version = r.version + 1
            WHERE r.reminder_uid = $1
            AND r.version = $2
            AND r.scheduled_for <= $3
            AND (
                r.status = 'PENDING'
                OR (r.status = 'PROCESSING' AND (r.claimed_at IS NULL OR r.claimed_at <= $4))
            )
            RETURNING *
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.version)
        .bind(now)
        .bind(stale_claim_before)
        .fetch_optional(&self.pool)
        .await?;

        match raw {
            Some(raw) => Ok(Some(Reminder::try_from(raw)?)),
            None => Ok(None),
        }
    }

    async fn release(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders AS r
            SET status = 'PENDING', claimed_at = NULL, last_attempt_at = $3
            WHERE r.reminder_uid = $1 AND r.version = $2 AND r.status = 'PROCESSING'
            "#,
        )
        .bind(claimed.id.inner_ref())
        .bind(claimed.version)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }

    async fn defer(&self, reminder: &Reminder, now: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders AS r
            SET last_attempt_at = $3
            WHERE r.reminder_uid = $1 AND r.version = $2 AND r.status IN ('PENDING', 'PROCESSING')
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.version)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }

    async fn mark_sent(&self, claimed: &Reminder, now: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders AS r
            SET status = 'SENT', sent_at = $3
            WHERE r.reminder_uid = $1 AND r.version = $2 AND r.status = 'PROCESSING'
            "#,
        )
        .bind(claimed.id.inner_ref())
        .bind(claimed.version)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }

    async fn cancel(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders AS r
            SET status = 'CANCELLED'
            WHERE r.reminder_uid = $1 AND r.version = $2 AND r.status IN ('PENDING', 'PROCESSING')
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.version)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }
}
