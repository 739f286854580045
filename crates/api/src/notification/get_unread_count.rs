use crate::{
    error::DealdeskError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::get_unread_count::*;
use dealdesk_domain::ID;
use dealdesk_infra::DealdeskContext;

pub async fn get_unread_count_controller(
    http_req: HttpRequest,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetUnreadCountUseCase {
        tenant_id: user.tenant_id,
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|count| HttpResponse::Ok().json(APIResponse { count }))
        .map_err(|_| DealdeskError::InternalError)
}

#[derive(Debug)]
pub struct GetUnreadCountUseCase {
    pub tenant_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUnreadCountUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notifications
            .count_unread(&self.tenant_id, &self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
