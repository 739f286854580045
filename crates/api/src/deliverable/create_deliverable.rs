use crate::{
    error::DealdeskError,
    reminder::{create_deliverable_reminders, create_publish_date_reminders},
    shared::{
        auth::protect_route,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::create_deliverable::*;
use dealdesk_domain::{Deliverable, ID};
use dealdesk_infra::DealdeskContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> DealdeskError {
    match e {
        UseCaseErrors::DealNotFound(deal_id) => DealdeskError::NotFound(format!(
            "The deal with id: {}, was not found.",
            deal_id
        )),
        UseCaseErrors::InvalidTitle => DealdeskError::BadClientData(
            "The deliverable title must be between 1 and 200 characters".into(),
        ),
        UseCaseErrors::StorageError => DealdeskError::InternalError,
    }
}

pub async fn create_deliverable_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateDeliverableUseCase {
        tenant_id: user.tenant_id,
        deal_id: path_params.deal_id.clone(),
        title: body.title,
        due_date: body.due_date,
        publish_date: body.publish_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|deliverable| HttpResponse::Created().json(APIResponse::new(deliverable)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateDeliverableUseCase {
    pub tenant_id: ID,
    pub deal_id: ID,
    pub title: String,
    pub due_date: Option<i64>,
    pub publish_date: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    DealNotFound(ID),
    InvalidTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateDeliverableUseCase {
    type Response = Deliverable;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let deal = match ctx
            .repos
            .deals
            .find_by_tenant_id(&self.deal_id, &self.tenant_id)
            .await
        {
            Some(deal) => deal,
            None => return Err(UseCaseErrors::DealNotFound(self.deal_id.clone())),
        };

        let deliverable = Deliverable::new(
            self.tenant_id.clone(),
            deal.id,
            self.title.trim().to_string(),
            self.due_date,
            self.publish_date,
            ctx.sys.get_timestamp_millis(),
        );
        if !deliverable.is_valid() {
            return Err(UseCaseErrors::InvalidTitle);
        }

        ctx.repos
            .deliverables
            .insert(&deliverable)
            .await
            .map(|_| deliverable)
            .map_err(|e| {
                error!("Unable to store deliverable: {:?}", e);
                UseCaseErrors::StorageError
            })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateRemindersOnDeliverableCreated)]
    }
}

pub struct CreateRemindersOnDeliverableCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateDeliverableUseCase> for CreateRemindersOnDeliverableCreated {
    async fn notify(&self, e: &Deliverable, ctx: &DealdeskContext) {
        // Sideeffects, the deliverable is stored either way
        if let Some(due_date) = e.due_date {
            let _ = create_deliverable_reminders(&e.deal_id, due_date, &e.tenant_id, ctx).await;
        }
        if let Some(publish_date) = e.publish_date {
            let _ =
                create_publish_date_reminders(&e.deal_id, publish_date, &e.tenant_id, ctx).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::failing_repos::FailingReminderRepo;
    use dealdesk_domain::{Deal, ReminderKind, MILLIS_PER_DAY};
    use std::sync::Arc;

    async fn setup_deal(ctx: &DealdeskContext) -> Deal {
        let deal = Deal::new(ID::default(), "Glossier Launch".into(), 0);
        ctx.repos.deals.insert(&deal).await.unwrap();
        deal
    }

    #[actix_web::test]
    async fn creates_reminders_when_due_date_is_set() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            title: "  TikTok video ".into(),
            due_date: Some(10 * MILLIS_PER_DAY),
            publish_date: None,
        };
        let deliverable = execute(usecase, &ctx).await.unwrap();
        assert_eq!(deliverable.title, "TikTok video");
        assert!(ctx.repos.deliverables.find(&deliverable.id).await.is_some());

        let reminders = ctx
            .repos
            .reminders
            .find_by_deal(&deal.tenant_id, &deal.id)
            .await
            .unwrap();
        assert_eq!(reminders.len(), 2);
        assert!(reminders
            .iter()
            .all(|r| r.kind == ReminderKind::DeliverableDue));
    }

    #[actix_web::test]
    async fn no_reminders_without_due_date() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            title: "Story".into(),
            due_date: None,
            publish_date: None,
        };
        assert!(execute(usecase, &ctx).await.is_ok());
        assert!(ctx
            .repos
            .reminders
            .find_by_deal(&deal.tenant_id, &deal.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::test]
    async fn rejects_deal_of_other_tenant() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: ID::default(),
            deal_id: deal.id.clone(),
            title: "Story".into(),
            due_date: Some(0),
            publish_date: None,
        };
        assert_eq!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::DealNotFound(deal.id))
        );
    }

    #[actix_web::test]
    async fn rejects_blank_title() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            title: "   ".into(),
            due_date: None,
            publish_date: None,
        };
        assert_eq!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidTitle)
        );
    }

    #[actix_web::test]
    async fn creates_publish_date_reminders() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            title: "YouTube integration".into(),
            due_date: Some(10 * MILLIS_PER_DAY),
            publish_date: Some(12 * MILLIS_PER_DAY),
        };
        let deliverable = execute(usecase, &ctx).await.unwrap();
        assert_eq!(deliverable.publish_date, Some(12 * MILLIS_PER_DAY));

        let reminders = ctx
            .repos
            .reminders
            .find_by_deal(&deal.tenant_id, &deal.id)
            .await
            .unwrap();
        assert_eq!(reminders.len(), 4);
        let publish: Vec<_> = reminders
            .iter()
            .filter(|r| r.kind == ReminderKind::PublishDate)
            .collect();
        assert_eq!(publish.len(), 2);
        assert!(publish.iter().all(|r| r.due_date() == 12 * MILLIS_PER_DAY));
    }

    #[actix_web::test]
    async fn deliverable_is_kept_when_reminders_cannot_be_stored() {
        let mut ctx = DealdeskContext::create_inmemory();
        ctx.repos.reminders = Arc::new(FailingReminderRepo {});
        let deal = setup_deal(&ctx).await;

        let usecase = CreateDeliverableUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            title: "Instagram carousel".into(),
            due_date: Some(10 * MILLIS_PER_DAY),
            publish_date: Some(11 * MILLIS_PER_DAY),
        };
        let deliverable = execute(usecase, &ctx).await.unwrap();
        assert_eq!(
            ctx.repos.deliverables.find(&deliverable.id).await,
            Some(deliverable.clone())
        );
    }
}
