use super::IPaymentRepo;
use dealdesk_domain::{Payment, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PaymentRaw {
    payment_uid: Uuid,
    tenant_uid: Uuid,
    deal_uid: Uuid,
    amount: i64,
    currency: String,
    due_date: Option<i64>,
    created: i64,
}

impl From<PaymentRaw> for Payment {
    fn from(raw: PaymentRaw) -> Self {
        Self {
            id: raw.payment_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            deal_id: raw.deal_uid.into(),
            amount: raw.amount,
            currency: raw.currency,
            due_date: raw.due_date,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IPaymentRepo for PostgresPaymentRepo {
    async fn insert(&self, payment: &Payment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payments(payment_uid, tenant_uid, deal_uid, amount, currency, due_date, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(payment.id.inner_ref())
        .bind(payment.tenant_id.inner_ref())
        .bind(payment.deal_id.inner_ref())
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(payment.due_date)
        .bind(payment.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, payment_id: &ID) -> Option<Payment> {
        let raw: PaymentRaw = sqlx::query_as(
            r#"
            SELECT * FROM payments AS p
            WHERE p.payment_uid = $1
            "#,
        )
        .bind(payment_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        Some(raw.into())
    }
}
