use crate::{
    error::DealdeskError,
    reminder::create_payment_reminders,
    shared::{
        auth::protect_route,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use dealdesk_api_structs::create_payment::*;
use dealdesk_domain::{Payment, ID};
use dealdesk_infra::DealdeskContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> DealdeskError {
    match e {
        UseCaseErrors::DealNotFound(deal_id) => DealdeskError::NotFound(format!(
            "The deal with id: {}, was not found.",
            deal_id
        )),
        UseCaseErrors::InvalidPayment => DealdeskError::BadClientData(
            "The amount must be positive and the currency a three letter ISO code".into(),
        ),
        UseCaseErrors::StorageError => DealdeskError::InternalError,
    }
}

pub async fn create_payment_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<DealdeskContext>,
) -> Result<HttpResponse, DealdeskError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreatePaymentUseCase {
        tenant_id: user.tenant_id,
        deal_id: path_params.deal_id.clone(),
        amount: body.amount,
        currency: body.currency,
        due_date: body.due_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|payment| HttpResponse::Created().json(APIResponse::new(payment)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreatePaymentUseCase {
    pub tenant_id: ID,
    pub deal_id: ID,
    pub amount: i64,
    pub currency: String,
    pub due_date: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    DealNotFound(ID),
    InvalidPayment,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePaymentUseCase {
    type Response = Payment;

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

        let payment = Payment::new(
            self.tenant_id.clone(),
            deal.id,
            self.amount,
            self.currency.trim().to_string(),
            self.due_date,
            ctx.sys.get_timestamp_millis(),
        );
        if !payment.is_valid() {
            return Err(UseCaseErrors::InvalidPayment);
        }

        ctx.repos
            .payments
            .insert(&payment)
            .await
            .map(|_| payment)
            .map_err(|e| {
                error!("Unable to store payment: {:?}", e);
                UseCaseErrors::StorageError
            })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateRemindersOnPaymentCreated)]
    }
}

pub struct CreateRemindersOnPaymentCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreatePaymentUseCase> for CreateRemindersOnPaymentCreated {
    async fn notify(&self, e: &Payment, ctx: &DealdeskContext) {
        if let Some(due_date) = e.due_date {
            // Sideeffect, ignore result
            let _ = create_payment_reminders(&e.deal_id, due_date, &e.tenant_id, ctx).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::failing_repos::FailingReminderRepo;
    use dealdesk_domain::{Deal, ReminderKind, MILLIS_PER_DAY};
    use std::sync::Arc;

    #[actix_web::test]
    async fn creates_payment_reminders() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = Deal::new(ID::default(), "Spotify Wrapped".into(), 0);
        ctx.repos.deals.insert(&deal).await.unwrap();

        let usecase = CreatePaymentUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            amount: 2500_00,
            currency: "usd".into(),
            due_date: Some(14 * MILLIS_PER_DAY),
        };
        let payment = execute(usecase, &ctx).await.unwrap();
        assert_eq!(payment.currency, "USD");

        let reminders = ctx
            .repos
            .reminders
            .find_by_deal(&deal.tenant_id, &deal.id)
            .await
            .unwrap();
        assert_eq!(reminders.len(), 2);
        assert!(reminders.iter().all(|r| r.kind == ReminderKind::PaymentDue));
    }

    #[actix_web::test]
    async fn rejects_invalid_amount() {
        let ctx = DealdeskContext::create_inmemory();
        let deal = Deal::new(ID::default(), "Spotify Wrapped".into(), 0);
        ctx.repos.deals.insert(&deal).await.unwrap();

        let usecase = CreatePaymentUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            amount: 0,
            currency: "USD".into(),
            due_date: Some(0),
        };
        assert_eq!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidPayment)
        );
        assert!(ctx
            .repos
            .reminders
            .find_by_deal(&deal.tenant_id, &deal.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::test]
    async fn payment_is_kept_when_reminders_cannot_be_stored() {
        let mut ctx = DealdeskContext::create_inmemory();
        ctx.repos.reminders = Arc::new(FailingReminderRepo {});
        let deal = Deal::new(ID::default(), "Spotify Wrapped".into(), 0);
        ctx.repos.deals.insert(&deal).await.unwrap();

        let usecase = CreatePaymentUseCase {
            tenant_id: deal.tenant_id.clone(),
            deal_id: deal.id.clone(),
            amount: 1200_00,
            currency: "EUR".into(),
            due_date: Some(14 * MILLIS_PER_DAY),
        };
        let payment = execute(usecase, &ctx).await.unwrap();
        let stored = ctx.repos.payments.find(&payment.id).await;
        assert_eq!(stored, Some(payment));
    }
}
