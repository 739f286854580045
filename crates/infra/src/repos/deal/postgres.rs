use super::IDealRepo;
use dealdesk_domain::{Deal, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresDealRepo {
    pool: PgPool,
}

impl PostgresDealRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DealRaw {
    deal_uid: Uuid,
    tenant_uid: Uuid,
    title: String,
    created: i64,
}

impl From<DealRaw> for Deal {
    fn from(raw: DealRaw) -> Self {
        Self {
            id: raw.deal_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            title: raw.title,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IDealRepo for PostgresDealRepo {
    async fn insert(&self, deal: &Deal) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO deals(deal_uid, tenant_uid, title, created)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(deal.id.inner_ref())
        .bind(deal.tenant_id.inner_ref())
        .bind(&deal.title)
        .bind(deal.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_tenant_id(&self, deal_id: &ID, tenant_id: &ID) -> Option<Deal> {
        let raw: DealRaw = sqlx::query_as(
            r#"
            SELECT * FROM deals AS d
            WHERE d.deal_uid = $1 AND d.tenant_uid = $2
            "#,
        )
        .bind(deal_id.inner_ref())
        .bind(tenant_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        Some(raw.into())
    }
}
