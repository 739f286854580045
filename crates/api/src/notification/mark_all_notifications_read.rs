use crate::{
    error::DealdeskError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::mark_all_notifications_read::*;
use dealdesk_domain::ID;
use dealdesk_infra::DealdeskContext;

pub async fn mark_all_notifications_read_controller(
    http_req: HttpRequest,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkAllNotificationsReadUseCase {
        tenant_id: user.tenant_id,
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|updated| HttpResponse::Ok().json(APIResponse { updated }))
        .map_err(|_| DealdeskError::InternalError)
}

#[derive(Debug)]
pub struct MarkAllNotificationsReadUseCase {
    pub tenant_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkAllNotificationsReadUseCase {
    /// Number of notifications that were unread
    type Response = u64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        ctx.repos
            .notifications
            .mark_all_read(&self.tenant_id, &self.user_id, now)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
