use crate::shared::entity::{Entity, ID};

const MAX_TITLE_LEN: usize = 200;

/// A piece of content the agency owes the brand as part of a `Deal`
#[derive(Debug, Clone, PartialEq)]
pub struct Deliverable {
    pub id: ID,
    pub tenant_id: ID,
    pub deal_id: ID,
    pub title: String,
    pub due_date: Option<i64>,
    /// When the content goes live on the creator's channel
    pub publish_date: Option<i64>,
    pub created: i64,
}

impl Deliverable {
    pub fn new(
        tenant_id: ID,
        deal_id: ID,
        title: String,
        due_date: Option<i64>,
        publish_date: Option<i64>,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            deal_id,
            title,
            due_date,
            publish_date,
            created,
        }
    }

    pub fn is_valid(&self) -> bool {
        let title = self.title.trim();
        !title.is_empty() && title.chars().count() <= MAX_TITLE_LEN
    }
}

impl Entity for Deliverable {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validates_title() {
        let d = |title: &str| Deliverable::new(ID::default(), ID::default(), title.into(), None, None, 0);
        assert!(d("Instagram reel").is_valid());
        assert!(!d("").is_valid());
        assert!(!d("   ").is_valid());
        assert!(!d(&"a".repeat(201)).is_valid());
    }
}
