mod inmemory;
mod postgres;

use super::shared::query_structs::NotificationQuery;
use dealdesk_domain::{Notification, ID};
pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    async fn find(&self, notification_id: &ID) -> Option<Notification>;
    /// Newest first
    async fn find_by_user(&self, query: NotificationQuery) -> anyhow::Result<Vec<Notification>>;
    async fn count_unread(&self, tenant_id: &ID, user_id: &ID) -> anyhow::Result<i64>;
    /// Sets `read_at` unless it is already set. Returns `None` when the
    /// notification does not exist in the inbox of the given user.
    async fn mark_read(
        &self,
        tenant_id: &ID,
        user_id: &ID,
        notification_id: &ID,
        now: i64,
    ) -> anyhow::Result<Option<Notification>>;
    /// Returns the number of notifications that went from unread to read
    async fn mark_all_read(&self, tenant_id: &ID, user_id: &ID, now: i64) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DealdeskContext;

    fn query(tenant_id: &ID, user_id: &ID, unread_only: bool) -> NotificationQuery {
        NotificationQuery {
            tenant_id: tenant_id.clone(),
            user_id: user_id.clone(),
            unread_only,
            skip: 0,
            limit: 50,
        }
    }

    #[tokio::test]
    async fn inbox_is_scoped_to_user_and_newest_first() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let user_id = ID::default();
        for created in 1..=3 {
            let n = Notification::new(
                tenant_id.clone(),
                user_id.clone(),
                "Payment Due".into(),
                format!("#{}", created),
                created,
            );
            ctx.repos.notifications.insert(&n).await.unwrap();
        }
        let other = Notification::new(tenant_id.clone(), ID::default(), "x".into(), "y".into(), 9);
        ctx.repos.notifications.insert(&other).await.unwrap();

        let inbox = ctx
            .repos
            .notifications
            .find_by_user(query(&tenant_id, &user_id, false))
            .await
            .unwrap();
        assert_eq!(
            inbox.iter().map(|n| n.created).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );

        let mut paged = query(&tenant_id, &user_id, false);
        paged.skip = 1;
        paged.limit = 1;
        let page = ctx.repos.notifications.find_by_user(paged).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].created, 2);

        // Same user id under another tenant sees nothing
        assert!(ctx
            .repos
            .notifications
            .find_by_user(query(&ID::default(), &user_id, false))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn mark_read_keeps_first_read_at() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let user_id = ID::default();
        let n = Notification::new(tenant_id.clone(), user_id.clone(), "a".into(), "b".into(), 1);
        ctx.repos.notifications.insert(&n).await.unwrap();
        assert_eq!(
            ctx.repos
                .notifications
                .count_unread(&tenant_id, &user_id)
                .await
                .unwrap(),
            1
        );

        let read = ctx
            .repos
            .notifications
            .mark_read(&tenant_id, &user_id, &n.id, 10)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(read.read_at, Some(10));

        let read_again = ctx
            .repos
            .notifications
            .mark_read(&tenant_id, &user_id, &n.id, 20)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(read_again.read_at, Some(10));

        // Someone else's inbox
        assert!(ctx
            .repos
            .notifications
            .mark_read(&tenant_id, &ID::default(), &n.id, 30)
            .await
            .unwrap()
            .is_none());

        assert_eq!(
            ctx.repos
                .notifications
                .count_unread(&tenant_id, &user_id)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn mark_all_read_only_touches_unread() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let user_id = ID::default();
        let first = Notification::new(tenant_id.clone(), user_id.clone(), "a".into(), "b".into(), 1);
        let second = Notification::new(tenant_id.clone(), user_id.clone(), "a".into(), "b".into(), 2);
        ctx.repos.notifications.insert(&first).await.unwrap();
        ctx.repos.notifications.insert(&second).await.unwrap();
        ctx.repos
            .notifications
            .mark_read(&tenant_id, &user_id, &first.id, 5)
            .await
            .unwrap();

        let updated = ctx
            .repos
            .notifications
            .mark_all_read(&tenant_id, &user_id, 7)
            .await
            .unwrap();
        assert_eq!(updated, 1);

        assert_eq!(
            ctx.repos.notifications.find(&first.id).await.unwrap().read_at,
            Some(5)
        );
        assert_eq!(
            ctx.repos.notifications.find(&second.id).await.unwrap().read_at,
            Some(7)
        );
        let unread = ctx
            .repos
            .notifications
            .find_by_user(query(&tenant_id, &user_id, true))
            .await
            .unwrap();
        assert!(unread.is_empty());
    }
}
