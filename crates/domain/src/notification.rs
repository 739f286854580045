use crate::shared::entity::{Entity, ID};

/// An in-app alert in the inbox of a `User`
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub tenant_id: ID,
    pub user_id: ID,
    pub title: String,
    pub body: String,
    /// Once set this never changes again
    pub read_at: Option<i64>,
    pub created: i64,
}

impl Notification {
    pub fn new(tenant_id: ID, user_id: ID, title: String, body: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            user_id,
            title,
            body,
            read_at: None,
            created,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Returns true if the notification went from unread to read
    pub fn mark_read(&mut self, now: i64) -> bool {
        if self.is_read() {
            return false;
        }
        self.read_at = Some(now);
        true
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}
