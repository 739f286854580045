use crate::shared::usecase::{execute, UseCase};
use dealdesk_domain::{Reminder, ReminderKind, ID};
use dealdesk_infra::DealdeskContext;
use tracing::error;

pub async fn create_deliverable_reminders(
    deal_id: &ID,
    due_date: i64,
    tenant_id: &ID,
    ctx: &DealdeskContext,
) -> Result<Vec<Reminder>, UseCaseError> {
    create_reminders(ReminderKind::DeliverableDue, deal_id, due_date, tenant_id, ctx).await
}

pub async fn create_payment_reminders(
    deal_id: &ID,
    due_date: i64,
    tenant_id: &ID,
    ctx: &DealdeskContext,
) -> Result<Vec<Reminder>, UseCaseError> {
    create_reminders(ReminderKind::PaymentDue, deal_id, due_date, tenant_id, ctx).await
}

pub async fn create_publish_date_reminders(
    deal_id: &ID,
    publish_date: i64,
    tenant_id: &ID,
    ctx: &DealdeskContext,
) -> Result<Vec<Reminder>, UseCaseError> {
    create_reminders(ReminderKind::PublishDate, deal_id, publish_date, tenant_id, ctx).await
}

async fn create_reminders(
    kind: ReminderKind,
    deal_id: &ID,
    due_date: i64,
    tenant_id: &ID,
    ctx: &DealdeskContext,
) -> Result<Vec<Reminder>, UseCaseError> {
    let usecase = CreateRemindersUseCase {
        tenant_id: tenant_id.clone(),
        deal_id: deal_id.clone(),
        kind,
        due_date,
    };
    execute(usecase, ctx).await
}

#[derive(Debug)]
struct CreateRemindersUseCase {
    pub tenant_id: ID,
    pub deal_id: ID,
    pub kind: ReminderKind,
    pub due_date: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let reminders = Reminder::schedule_for_due_date(
            &self.tenant_id,
            &self.deal_id,
            self.kind,
            self.due_date,
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map(|_| reminders)
            .map_err(|e| {
                error!("Unable to store reminders: {:?}", e);
                UseCaseError::StorageError
            })
    }
}
