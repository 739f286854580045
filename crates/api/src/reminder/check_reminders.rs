use super::templates;
use crate::{
    notification::create_notification,
    shared::usecase::UseCase,
};
use actix_web::rt::time::timeout;
use dealdesk_domain::{Deal, Reminder, ReminderChannel, User};
use dealdesk_infra::DealdeskContext;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// What happened to the `Reminder`s selected by one check
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckRemindersReport {
    pub selected: usize,
    pub sent: usize,
    /// Left for a later check: no recipient yet or claimed by another worker
    pub skipped: usize,
    /// Dispatch failed and the claim was released
    pub failed: usize,
    /// The parent `Deal` no longer exists
    pub cancelled: usize,
    /// Dispatched, but the claim expired and was taken over before the
    /// reminder could be marked `Sent`. The new claimer may deliver it again.
    pub lost_claims: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Sent,
    Skipped,
    Failed,
    Cancelled,
    LostClaim,
}

impl CheckRemindersReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Sent => self.sent += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Cancelled => self.cancelled += 1,
            Outcome::LostClaim => self.lost_claims += 1,
        }
    }
}

/// Delivers every due `Reminder` to the owner of its tenant.
///
/// Each `Reminder` is claimed before anything is dispatched and only marked
/// `Sent` once its email and in-app notification went out, so a failed
/// dispatch is retried by a later check and two workers never dispatch the
/// same claim.
#[derive(Debug)]
pub struct CheckRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckRemindersUseCase {
    type Response = CheckRemindersReport;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &DealdeskContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let stale_claim_before = now - ctx.config.reminder_claim_timeout_millis;

        let reminders = ctx
            .repos
            .reminders
            .find_due(now, stale_claim_before, ctx.config.reminder_batch_size)
            .await
            .map_err(|e| {
                error!("Unable to fetch due reminders: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut report = CheckRemindersReport {
            selected: reminders.len(),
            ..Default::default()
        };
        for reminder in &reminders {
            let outcome = match process_reminder(reminder, now, stale_claim_before, ctx).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(reminder_id = %reminder.id, "Failed to process reminder: {:?}", e);
                    if let Err(e) = ctx.repos.reminders.defer(reminder, now).await {
                        error!(reminder_id = %reminder.id, "Unable to defer reminder: {:?}", e);
                    }
                    Outcome::Failed
                }
            };
            report.record(outcome);
        }

        if report.selected > 0 {
            info!(
                selected = report.selected,
                sent = report.sent,
                skipped = report.skipped,
                failed = report.failed,
                cancelled = report.cancelled,
                lost_claims = report.lost_claims,
                "Reminder check finished"
            );
        }
        Ok(report)
    }
}

async fn process_reminder(
    reminder: &Reminder,
    now: i64,
    stale_claim_before: i64,
    ctx: &DealdeskContext,
) -> anyhow::Result<Outcome> {
    let deal = match ctx
        .repos
        .deals
        .find_by_tenant_id(&reminder.deal_id, &reminder.tenant_id)
        .await
    {
        Some(deal) => deal,
        None => {
            if ctx.repos.reminders.cancel(reminder).await? {
                info!(reminder_id = %reminder.id, deal_id = %reminder.deal_id, "Deal is gone, cancelled reminder");
                return Ok(Outcome::Cancelled);
            }
            return Ok(Outcome::Skipped);
        }
    };

    let owner = match ctx.repos.users.find_tenant_owner(&reminder.tenant_id).await? {
        Some(owner) => owner,
        None => {
            warn!(
                reminder_id = %reminder.id,
                tenant_id = %reminder.tenant_id,
                "Tenant has no owner to deliver the reminder to, leaving it pending"
            );
            ctx.repos.reminders.defer(reminder, now).await?;
            return Ok(Outcome::Skipped);
        }
    };

    let claimed = match ctx
        .repos
        .reminders
        .claim(reminder, now, stale_claim_before)
        .await?
    {
        Some(claimed) => claimed,
        None => {
            debug!(reminder_id = %reminder.id, "Reminder was claimed by another worker");
            return Ok(Outcome::Skipped);
        }
    };

    if let Err(e) = dispatch(&claimed, &deal, &owner, ctx).await {
        error!(reminder_id = %claimed.id, "Reminder dispatch failed, releasing claim: {:?}", e);
        ctx.repos.reminders.release(&claimed, now).await?;
        return Ok(Outcome::Failed);
    }

    if !ctx.repos.reminders.mark_sent(&claimed, now).await? {
        // Claim expired and was taken over while dispatching
        warn!(
            reminder_id = %claimed.id,
            "Lost the claim before the reminder could be marked sent, it may be delivered twice"
        );
        return Ok(Outcome::LostClaim);
    }
    Ok(Outcome::Sent)
}

async fn dispatch(
    reminder: &Reminder,
    deal: &Deal,
    recipient: &User,
    ctx: &DealdeskContext,
) -> anyhow::Result<()> {
    let due_date = reminder.due_date();

    match reminder.channel {
        ReminderChannel::Email => {
            let html = templates::email_html(reminder.kind, deal, recipient, due_date);
            let send = ctx
                .email
                .send_email(&recipient.email, reminder.kind.email_subject(), &html);
            match timeout(Duration::from_millis(ctx.config.email_timeout_millis), send).await {
                Ok(res) => res?,
                Err(_) => {
                    return Err(anyhow::anyhow!(
                        "Email dispatch timed out after {} ms",
                        ctx.config.email_timeout_millis
                    ))
                }
            }
        }
        ReminderChannel::InApp => (),
    }

    create_notification(
        &reminder.tenant_id,
        &recipient.id,
        reminder.kind.notification_title(),
        &templates::notification_body(reminder.kind, deal, due_date),
        ctx,
    )
    .await
    .map_err(|e| anyhow::anyhow!("Unable to create notification: {:?}", e))?;

    Ok(())
}
