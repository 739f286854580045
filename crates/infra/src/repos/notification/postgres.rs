use super::INotificationRepo;
use crate::repos::shared::query_structs::NotificationQuery;
use dealdesk_domain::{Notification, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    tenant_uid: Uuid,
    user_uid: Uuid,
    title: String,
    body: String,
    read_at: Option<i64>,
    created: i64,
}

impl From<NotificationRaw> for Notification {
    fn from(raw: NotificationRaw) -> Self {
        Self {
            id: raw.notification_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            user_id: raw.user_uid.into(),
            title: raw.title,
            body: raw.body,
            read_at: raw.read_at,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_uid, tenant_uid, user_uid, title, body, read_at, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.tenant_id.inner_ref())
        .bind(notification.user_id.inner_ref())
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(notification.read_at)
        .bind(notification.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        let raw: NotificationRaw = sqlx::query_as(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        Some(raw.into())
    }

    async fn find_by_user(&self, query: NotificationQuery) -> anyhow::Result<Vec<Notification>> {
        let rows: Vec<NotificationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.tenant_uid = $1 AND n.user_uid = $2
            AND ($3 = FALSE OR n.read_at IS NULL)
            ORDER BY n.created DESC
            OFFSET $4
            LIMIT $5
            "#,
        )
        .bind(query.tenant_id.inner_ref())
        .bind(query.user_id.inner_ref())
        .bind(query.unread_only)
        .bind(query.skip as i64)
        .bind(query.limit as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|n| n.into()).collect())
    }

    async fn count_unread(&self, tenant_id: &ID, user_id: &ID) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM notifications AS n
            WHERE n.tenant_uid = $1 AND n.user_uid = $2 AND n.read_at IS NULL
            "#,
        )
        .bind(tenant_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn mark_read(
        &self,
        tenant_id: &ID,
        user_id: &ID,
        notification_id: &ID,
        now: i64,
    ) -> anyhow::Result<Option<Notification>> {
        let raw: Option<NotificationRaw> = sqlx::query_as(
            r#"
            UPDATE notifications AS n
            SET read_at = COALESCE(n.read_at, $4)
            WHERE n.notification_uid = $1 AND n.tenant_uid = $2 AND n.user_uid = $3
            RETURNING *
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(tenant_id.inner_ref())
        .bind(user_id.inner_ref())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(raw.map(|n| n.into()))
    }

    async fn mark_all_read(&self, tenant_id: &ID, user_id: &ID, now: i64) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE notifications AS n
            SET read_at = $3
            WHERE n.tenant_uid = $1 AND n.user_uid = $2 AND n.read_at IS NULL
            "#,
        )
        .bind(tenant_id.inner_ref())
        .bind(user_id.inner_ref())
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }
}
