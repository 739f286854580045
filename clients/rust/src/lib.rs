mod base;
mod deal;
mod notification;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use deal::DealClient;
pub use deal::{CreateDeliverableInput, CreatePaymentInput};
pub use dealdesk_api_structs::dtos::*;
pub use dealdesk_domain::{ReminderChannel, ReminderKind, ReminderStatus, ID};
use notification::NotificationClient;
pub use notification::GetNotificationsInput;
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use dealdesk_api_structs::dtos::DeliverableDTO as Deliverable;
pub use dealdesk_api_structs::dtos::NotificationDTO as Notification;
pub use dealdesk_api_structs::dtos::PaymentDTO as Payment;
pub use dealdesk_api_structs::dtos::ReminderDTO as Reminder;

/// Dealdesk SDK
///
/// The SDK contains methods for interacting with the Dealdesk reminder
/// API on behalf of a user.
#[derive(Clone)]
pub struct DealdeskSDK {
    pub deal: DealClient,
    pub notification: NotificationClient,
    pub status: StatusClient,
}

impl DealdeskSDK {
    /// Client without user credentials, only public endpoints will succeed
    pub fn new(address: String) -> Self {
        Self::create(BaseClient::new(address))
    }

    pub fn for_user(address: String, tenant_id: &ID, user_id: &ID) -> Self {
        let mut base = BaseClient::new(address);
        base.set_credentials(tenant_id.to_string(), user_id.to_string());
        Self::create(base)
    }

    fn create(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let deal = DealClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            deal,
            notification,
            status,
        }
    }
}
