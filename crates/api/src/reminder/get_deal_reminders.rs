use crate::{
    error::DealdeskError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::get_deal_reminders::*;
use dealdesk_domain::{Reminder, ID};
use dealdesk_infra::DealdeskContext;

fn handle_error(e: UseCaseErrors) -> DealdeskError {
    match e {
        UseCaseErrors::DealNotFound(deal_id) => DealdeskError::NotFound(format!(
            "The deal with id: {}, was not found.",
            deal_id
        )),
        UseCaseErrors::StorageError => DealdeskError::InternalError,
    }
}

pub async fn get_deal_reminders_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetDealRemindersUseCase {
        tenant_id: user.tenant_id,
        deal_id: path_params.deal_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetDealRemindersUseCase {
    pub tenant_id: ID,
    pub deal_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    DealNotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDealRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        if ctx
            .repos
            .deals
            .find_by_tenant_id(&self.deal_id, &self.tenant_id)
            .await
            .is_none()
        {
            return Err(UseCaseErrors::DealNotFound(self.deal_id.clone()));
        }

        ctx.repos
            .reminders
            .find_by_deal(&self.tenant_id, &self.deal_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
