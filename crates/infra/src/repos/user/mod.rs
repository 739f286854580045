mod inmemory;
mod postgres;

use dealdesk_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_tenant_id(&self, user_id: &ID, tenant_id: &ID) -> Option<User>;
    /// The earliest created `Owner` of the tenant. Tenants normally have
    /// exactly one.
    async fn find_tenant_owner(&self, tenant_id: &ID) -> anyhow::Result<Option<User>>;
}

#[cfg(test)]
mod tests {
    use crate::DealdeskContext;
    use dealdesk_domain::{User, UserRole, ID};

    fn user(tenant_id: &ID, role: UserRole, created: i64) -> User {
        User::new(
            tenant_id.clone(),
            format!("User {}", created),
            format!("user{}@agency.io", created),
            role,
            created,
        )
    }

    #[tokio::test]
    async fn finds_earliest_owner_of_tenant() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();

        assert!(ctx
            .repos
            .users
            .find_tenant_owner(&tenant_id)
            .await
            .unwrap()
            .is_none());

        let member = user(&tenant_id, UserRole::Member, 1);
        let late_owner = user(&tenant_id, UserRole::Owner, 5);
        let owner = user(&tenant_id, UserRole::Owner, 2);
        let other_tenant_owner = user(&ID::default(), UserRole::Owner, 0);
        for u in &[&member, &late_owner, &owner, &other_tenant_owner] {
            ctx.repos.users.insert(u).await.unwrap();
        }

        let found = ctx
            .repos
            .users
            .find_tenant_owner(&tenant_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, owner.id);
    }

    #[tokio::test]
    async fn find_by_tenant_id_does_not_cross_tenants() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let member = user(&tenant_id, UserRole::Member, 1);
        ctx.repos.users.insert(&member).await.unwrap();

        assert!(ctx
            .repos
            .users
            .find_by_tenant_id(&member.id, &tenant_id)
            .await
            .is_some());
        assert!(ctx
            .repos
            .users
            .find_by_tenant_id(&member.id, &ID::default())
            .await
            .is_none());
    }
}
