mod deal;
mod deliverable;
mod job;
mod notification;
mod payment;
mod reminder;
mod shared;
mod user;

pub use deal::Deal;
pub use deliverable::Deliverable;
pub use job::{JobKind, RepeatableJob};
pub use notification::Notification;
pub use payment::Payment;
pub use reminder::{
    Reminder, ReminderChannel, ReminderKind, ReminderStatus, EMAIL_REMINDER_OFFSET_MILLIS,
    MILLIS_PER_DAY,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::enums::InvalidVariantError;
pub use user::{User, UserRole};
