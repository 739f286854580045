use super::IUserRepo;
use dealdesk_domain::{User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    tenant_uid: Uuid,
    name: String,
    email: String,
    role: String,
    created: i64,
}

impl TryFrom<UserRaw> for User {
    type Error = anyhow::Error;

    fn try_from(raw: UserRaw) -> Result<Self, Self::Error> {
        Ok(User {
            id: raw.user_uid.into(),
            tenant_id: raw.tenant_uid.into(),
            name: raw.name,
            email: raw.email,
            role: raw.role.parse()?,
            created: raw.created,
        })
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, tenant_uid, name, email, role, created)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(user.tenant_id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(user.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let raw: UserRaw = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        User::try_from(raw).ok()
    }

    async fn find_by_tenant_id(&self, user_id: &ID, tenant_id: &ID) -> Option<User> {
        let raw: UserRaw = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1 AND u.tenant_uid = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(tenant_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;
        User::try_from(raw).ok()
    }

    async fn find_tenant_owner(&self, tenant_id: &ID) -> anyhow::Result<Option<User>> {
        let raw: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.tenant_uid = $1 AND u.role = 'OWNER'
            ORDER BY u.created ASC
            LIMIT 1
            "#,
        )
        .bind(tenant_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        match raw {
            Some(raw) => Ok(Some(User::try_from(raw)?)),
            None => Ok(None),
        }
    }
}
