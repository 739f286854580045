use crate::{
    error::DealdeskError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::get_notifications::*;
use dealdesk_domain::{Notification, ID};
use dealdesk_infra::{DealdeskContext, NotificationQuery};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

fn handle_error(e: UseCaseErrors) -> DealdeskError {
    match e {
        UseCaseErrors::InvalidLimit(limit) => DealdeskError::BadClientData(format!(
            "The limit: {}, must be between 1 and {}",
            limit, MAX_LIMIT
        )),
        UseCaseErrors::StorageError => DealdeskError::InternalError,
    }
}

pub async fn get_notifications_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let query = query_params.0;
    let usecase = GetNotificationsUseCase {
        tenant_id: user.tenant_id,
        user_id: user.id,
        unread_only: query.unread.unwrap_or(false),
        skip: query.skip.unwrap_or(0),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|notifications| HttpResponse::Ok().json(APIResponse::new(notifications)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {
    pub tenant_id: ID,
    pub user_id: ID,
    pub unread_only: bool,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    InvalidLimit(usize),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationsUseCase {
    type Response = Vec<Notification>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(UseCaseErrors::InvalidLimit(self.limit));
        }

        let query = NotificationQuery {
            tenant_id: self.tenant_id.clone(),
            user_id: self.user_id.clone(),
            unread_only: self.unread_only,
            skip: self.skip,
            limit: self.limit,
        };
        ctx.repos
            .notifications
            .find_by_user(query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
