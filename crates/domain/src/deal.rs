use crate::shared::entity::{Entity, ID};

/// A `Deal` between an agency and a brand. Reminders hang off deals and are
/// removed together with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: ID,
    pub tenant_id: ID,
    pub title: String,
    pub created: i64,
}

impl Deal {
    pub fn new(tenant_id: ID, title: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            title,
            created,
        }
    }
}

impl Entity for Deal {
    fn id(&self) -> &ID {
        &self.id
    }
}
