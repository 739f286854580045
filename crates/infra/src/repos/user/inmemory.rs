use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use dealdesk_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_tenant_id(&self, user_id: &ID, tenant_id: &ID) -> Option<User> {
        find_by(&self.users, |u| u.id == *user_id && u.tenant_id == *tenant_id)
            .into_iter()
            .next()
    }

    async fn find_tenant_owner(&self, tenant_id: &ID) -> anyhow::Result<Option<User>> {
        let owners = find_by(&self.users, |u| u.tenant_id == *tenant_id && u.is_owner());
        Ok(owners.into_iter().min_by_key(|u| u.created))
    }
}
