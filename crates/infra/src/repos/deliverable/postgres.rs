use super::IDeliverableRepo;
use dealdesk_domain::{Deliverable, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresDeliverableRepo {
    pool: PgPool,
}

impl PostgresDeliverableRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DeliverableRaw {
    deliverable_uid: Uuid,
    tenant_uid: Uuid,
    deal_uid: Uuid,
    title: String,
    due_date: Option<i64>,
    publish_date: Option<i64>,
    created: i64,
}

impl From<DeliverableRaw> for Deliverable {
    fn from(raw: DeliverableRaw) -> Self {
        Self {
            id: raw.deliverable_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            deal_id: raw.deal_uid.into(),
            title: raw.title,
            due_date: raw.due_date,
            publish_date: raw.publish_date,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IDeliverableRepo for PostgresDeliverableRepo {
    async fn insert(&self, deliverable: &Deliverable) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO deliverables(deliverable_uid, tenant_uid, deal_uid, title, due_date, publish_date, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(deliverable.id.inner_ref())
        .bind(deliverable.tenant_id.inner_ref())
        .bind(deliverable.deal_id.inner_ref())
        .bind(&deliverable.title)
        .bind(deliverable.due_date)
        .bind(deliverable.publish_date)
        .bind(deliverable.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, deliverable_id: &ID) -> Option<Deliverable> {
        let raw: DeliverableRaw = sqlx::query_as(
            r#"
            SELECT * FROM deliverables AS d
            WHERE d.deliverable_uid = $1
            "#,
        )
        .bind(deliverable_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        Some(raw.into())
    }
}
