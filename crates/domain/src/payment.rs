use crate::shared::entity::{Entity, ID};

/// A payment the brand owes for a `Deal`
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: ID,
    pub tenant_id: ID,
    pub deal_id: ID,
    /// Amount in the minor unit of `currency`, e.g. cents
    pub amount: i64,
    /// ISO 4217 code, e.g. "USD"
    pub currency: String,
    pub due_date: Option<i64>,
    pub created: i64,
}

impl Payment {
    pub fn new(
        tenant_id: ID,
        deal_id: ID,
        amount: i64,
        currency: String,
        due_date: Option<i64>,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            deal_id,
            amount,
            currency: currency.to_uppercase(),
            due_date,
            created,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.amount > 0
            && self.currency.len() == 3
            && self.currency.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl Entity for Payment {
    fn id(&self) -> &ID {
        &self.id
    }
}
