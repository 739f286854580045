use crate::{
    error::DealdeskError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::mark_notification_read::*;
use dealdesk_domain::{Notification, ID};
use dealdesk_infra::DealdeskContext;

fn handle_error(e: UseCaseErrors) -> DealdeskError {
    match e {
        UseCaseErrors::NotFound(notification_id) => DealdeskError::NotFound(format!(
            "The notification with id: {}, was not found.",
            notification_id
        )),
        UseCaseErrors::StorageError => DealdeskError::InternalError,
    }
}

pub async fn mark_notification_read_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkNotificationReadUseCase {
        tenant_id: user.tenant_id,
        user_id: user.id,
        notification_id: path_params.notification_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Ok().json(APIResponse::new(notification)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
    pub tenant_id: ID,
    pub user_id: ID,
    pub notification_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkNotificationReadUseCase {
    type Response = Notification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let res = ctx
            .repos
            .notifications
            .mark_read(&self.tenant_id, &self.user_id, &self.notification_id, now)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        res.ok_or_else(|| UseCaseErrors::NotFound(self.notification_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dealdesk_infra::StaticTimeSys;
    use std::sync::Arc;

    #[actix_web::test]
    async fn second_read_keeps_first_read_at() {
        let mut ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let user_id = ID::default();
        let notification = Notification::new(
            tenant_id.clone(),
            user_id.clone(),
            "Payment Due".into(),
            "Body".into(),
            0,
        );
        ctx.repos.notifications.insert(&notification).await.unwrap();

        ctx.sys = Arc::new(StaticTimeSys(100));
        let usecase = MarkNotificationReadUseCase {
            tenant_id: tenant_id.clone(),
            user_id: user_id.clone(),
            notification_id: notification.id.clone(),
        };
        let first = execute(usecase, &ctx).await.unwrap();
        assert_eq!(first.read_at, Some(100));

        ctx.sys = Arc::new(StaticTimeSys(200));
        let usecase = MarkNotificationReadUseCase {
            tenant_id,
            user_id,
            notification_id: notification.id.clone(),
        };
        let second = execute(usecase, &ctx).await.unwrap();
        assert_eq!(second.read_at, Some(100));
    }

    #[actix_web::test]
    async fn cannot_read_notification_of_other_user() {
        let ctx = DealdeskContext::create_inmemory();
        let tenant_id = ID::default();
        let notification = Notification::new(
            tenant_id.clone(),
            ID::default(),
            "Payment Due".into(),
            "Body".into(),
            0,
        );
        ctx.repos.notifications.insert(&notification).await.unwrap();

        let usecase = MarkNotificationReadUseCase {
            tenant_id,
            user_id: ID::default(),
            notification_id: notification.id.clone(),
        };
        assert_eq!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::NotFound(notification.id))
        );
    }
}
