use super::INotificationRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::NotificationQuery};
use dealdesk_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        find(notification_id, &self.notifications)
    }

    async fn find_by_user(&self, query: NotificationQuery) -> anyhow::Result<Vec<Notification>> {
        let mut notifications = find_by(&self.notifications, |n| {
            n.tenant_id == query.tenant_id
                && n.user_id == query.user_id
                && (!query.unread_only || !n.is_read())
        });
        notifications.sort_by(|n1, n2| n2.created.cmp(&n1.created));
        Ok(notifications
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }

    async fn count_unread(&self, tenant_id: &ID, user_id: &ID) -> anyhow::Result<i64> {
        let unread = find_by(&self.notifications, |n| {
            n.tenant_id == *tenant_id && n.user_id == *user_id && !n.is_read()
        });
        Ok(unread.len() as i64)
    }

    async fn mark_read(
        &self,
        tenant_id: &ID,
        user_id: &ID,
        notification_id: &ID,
        now: i64,
    ) -> anyhow::Result<Option<Notification>> {
        Ok(update_one_if(
            notification_id,
            &self.notifications,
            |n| n.tenant_id == *tenant_id && n.user_id == *user_id,
            |n| {
                n.mark_read(now);
            },
        ))
    }

    async fn mark_all_read(&self, tenant_id: &ID, user_id: &ID, now: i64) -> anyhow::Result<u64> {
        let updated = update_many(
            &self.notifications,
            |n| n.tenant_id == *tenant_id && n.user_id == *user_id && !n.is_read(),
            |n| {
                n.mark_read(now);
            },
        );
        Ok(updated.len() as u64)
    }
}
