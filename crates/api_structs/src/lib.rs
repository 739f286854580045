mod deliverable;
mod notification;
mod payment;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::deliverable::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::payment::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::deliverable::api::*;
pub use crate::notification::api::*;
pub use crate::payment::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
