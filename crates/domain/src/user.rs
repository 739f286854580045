use crate::shared::{
    entity::{Entity, ID},
    enums::InvalidVariantError,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Administrates the tenant and receives its reminders
    Owner,
    Admin,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }
}

impl FromStr for UserRole {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNER" => Ok(Self::Owner),
            "ADMIN" => Ok(Self::Admin),
            "MEMBER" => Ok(Self::Member),
            _ => Err(InvalidVariantError::new("user role", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub tenant_id: ID,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created: i64,
}

impl User {
    pub fn new(tenant_id: ID, name: String, email: String, role: UserRole, created: i64) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            name,
            email,
            role,
            created,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
