use crate::shared::usecase::{execute, UseCase};
use dealdesk_domain::{Notification, ID};
use dealdesk_infra::DealdeskContext;
use tracing::error;

/// Writes an in-app `Notification` into the inbox of a `User`
pub async fn create_notification(
    tenant_id: &ID,
    user_id: &ID,
    title: &str,
    body: &str,
    ctx: &DealdeskContext,
) -> Result<Notification, UseCaseError> {
    let usecase = CreateNotificationUseCase {
        tenant_id: tenant_id.clone(),
        user_id: user_id.clone(),
        title: title.to_string(),
        body: body.to_string(),
    };
    execute(usecase, ctx).await
}

#[derive(Debug)]
struct CreateNotificationUseCase {
    pub tenant_id: ID,
    pub user_id: ID,
    pub title: String,
    pub body: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNotificationUseCase {
    type Response = Notification;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let notification = Notification::new(
            self.tenant_id.clone(),
            self.user_id.clone(),
            self.title.clone(),
            self.body.clone(),
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .notifications
            .insert(&notification)
            .await
            .map(|_| notification)
            .map_err(|e| {
                error!("Unable to store notification: {:?}", e);
                UseCaseError::StorageError
            })
    }
}
