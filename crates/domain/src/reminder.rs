use crate::shared::{
    entity::{Entity, ID},
    enums::InvalidVariantError,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// The email `Reminder` for a due date is scheduled this long before it
pub const EMAIL_REMINDER_OFFSET_MILLIS: i64 = 2 * MILLIS_PER_DAY;

/// What the `Reminder` is about. Every template lookup matches on this
/// exhaustively so that adding a kind forces new subjects and titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderKind {
    PaymentDue,
    DeliverableDue,
    PublishDate,
}

impl ReminderKind {
    pub const ALL: [Self; 3] = [Self::PaymentDue, Self::DeliverableDue, Self::PublishDate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentDue => "PAYMENT_DUE",
            Self::DeliverableDue => "DELIVERABLE_DUE",
            Self::PublishDate => "PUBLISH_DATE",
        }
    }

    pub fn email_subject(&self) -> &'static str {
        match self {
            Self::PaymentDue => "Payment Due SOON",
            Self::DeliverableDue => "Deliverable Due SOON",
            Self::PublishDate => "Publish Date Upcoming",
        }
    }

    pub fn notification_title(&self) -> &'static str {
        match self {
            Self::PaymentDue => "Payment Due",
            Self::DeliverableDue => "Deliverable Due",
            Self::PublishDate => "Publish Date",
        }
    }
}

impl FromStr for ReminderKind {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAYMENT_DUE" => Ok(Self::PaymentDue),
            "DELIVERABLE_DUE" => Ok(Self::DeliverableDue),
            "PUBLISH_DATE" => Ok(Self::PublishDate),
            _ => Err(InvalidVariantError::new("reminder kind", s)),
        }
    }
}

/// The medium a `Reminder` is delivered through. In-app notifications are
/// written for both channels, `Email` additionally sends an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderChannel {
    Email,
    InApp,
}

impl ReminderChannel {
    pub const ALL: [Self; 2] = [Self::Email, Self::InApp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::InApp => "IN_APP",
        }
    }

    /// Offset in millis between the due date and the time the reminder fires
    pub fn offset_millis(&self) -> i64 {
        match self {
            Self::Email => EMAIL_REMINDER_OFFSET_MILLIS,
            Self::InApp => 0,
        }
    }
}

impl FromStr for ReminderChannel {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(Self::Email),
            "IN_APP" => Ok(Self::InApp),
            _ => Err(InvalidVariantError::new("reminder channel", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    Pending,
    /// Claimed by a worker which is currently dispatching it
    Processing,
    Sent,
    Cancelled,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Sent => "SENT",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sent | Self::Cancelled)
    }
}

impl FromStr for ReminderStatus {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "SENT" => Ok(Self::Sent),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(InvalidVariantError::new("reminder status", s)),
        }
    }
}

/// A `Reminder` is an obligation to notify the owner of a tenant about
/// an upcoming payment, deliverable or publish date of a `Deal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub tenant_id: ID,
    pub deal_id: ID,
    pub kind: ReminderKind,
    pub channel: ReminderChannel,
    /// Timestamp in millis at which the `Reminder` becomes due
    pub scheduled_for: i64,
    pub status: ReminderStatus,
    /// Incremented on every claim. Workers use it as the compare key so that
    /// a `Reminder` is only ever dispatched by the worker holding the latest claim.
    pub version: i64,
    pub claimed_at: Option<i64>,
    /// Last time a check left this `Reminder` undelivered. Due reminders are
    /// taken never attempted first, then by this, so reminders that keep
    /// failing cannot fill every batch.
    pub last_attempt_at: Option<i64>,
    pub sent_at: Option<i64>,
    pub created: i64,
}

impl Reminder {
    pub fn new(
        tenant_id: ID,
        deal_id: ID,
        kind: ReminderKind,
        channel: ReminderChannel,
        scheduled_for: i64,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            deal_id,
            kind,
            channel,
            scheduled_for,
            status: ReminderStatus::Pending,
            version: 0,
            claimed_at: None,
            last_attempt_at: None,
            sent_at: None,
            created,
        }
    }

    /// The two `Reminder`s for a due date: an email two days before and an
    /// in-app reminder on the day. Past due dates are accepted and will
    /// simply be due on the next check.
    pub fn schedule_for_due_date(
        tenant_id: &ID,
        deal_id: &ID,
        kind: ReminderKind,
        due_date: i64,
        created: i64,
    ) -> Vec<Self> {
        [ReminderChannel::Email, ReminderChannel::InApp]
            .iter()
            .map(|channel| {
                Self::new(
                    tenant_id.clone(),
                    deal_id.clone(),
                    kind,
                    *channel,
                    due_date - channel.offset_millis(),
                    created,
                )
            })
            .collect()
    }

    /// The due date this `Reminder` was derived from
    pub fn due_date(&self) -> i64 {
        self.scheduled_for + self.channel.offset_millis()
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.scheduled_for <= now
    }

    /// Whether a worker may claim this `Reminder` at `now`. A `Processing`
    /// reminder claimed at or before `stale_claim_before` belongs to a worker
    /// that never finished and is claimable again.
    pub fn is_claimable(&self, now: i64, stale_claim_before: i64) -> bool {
        if !self.is_due(now) {
            return false;
        }
        match self.status {
            ReminderStatus::Pending => true,
            ReminderStatus::Processing => self
                .claimed_at
                .map(|claimed_at| claimed_at <= stale_claim_before)
                .unwrap_or(true),
            ReminderStatus::Sent | ReminderStatus::Cancelled => false,
        }
    }

    pub fn claim(&mut self, now: i64) {
        self.status = ReminderStatus::Processing;
        self.claimed_at = Some(now);
        self.version += 1;
    }

    pub fn release(&mut self, now: i64) {
        self.status = ReminderStatus::Pending;
        self.claimed_at = None;
        self.last_attempt_at = Some(now);
    }

    /// Leaves the `Reminder` for a later check without changing its status
    pub fn defer(&mut self, now: i64) {
        self.last_attempt_at = Some(now);
    }

    /// Order in which due reminders are handed to workers
    pub fn retry_order(&self) -> (Option<i64>, i64) {
        (self.last_attempt_at, self.scheduled_for)
    }

    pub fn mark_sent(&mut self, now: i64) {
        self.status = ReminderStatus::Sent;
        self.sent_at = Some(now);
    }

    pub fn cancel(&mut self) {
        self.status = ReminderStatus::Cancelled;
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn schedules_email_and_in_app_reminders_for_due_date() {
        let tenant_id = ID::default();
        let deal_id = ID::default();
        let due = 1718006400000; // 2024-06-10T08:00:00Z

        let reminders =
            Reminder::schedule_for_due_date(&tenant_id, &deal_id, ReminderKind::DeliverableDue, due, 5);
        assert_eq!(reminders.len(), 2);

        let email = &reminders[0];
        assert_eq!(email.channel, ReminderChannel::Email);
        assert_eq!(email.scheduled_for, due - 2 * MILLIS_PER_DAY);
        assert_eq!(email.due_date(), due);

        let in_app = &reminders[1];
        assert_eq!(in_app.channel, ReminderChannel::InApp);
        assert_eq!(in_app.scheduled_for, due);
        assert_eq!(in_app.due_date(), due);

        for r in &reminders {
            assert_eq!(r.status, ReminderStatus::Pending);
            assert_eq!(r.kind, ReminderKind::DeliverableDue);
            assert_eq!(r.tenant_id, tenant_id);
            assert_eq!(r.deal_id, deal_id);
            assert_eq!(r.created, 5);
        }
        assert_ne!(reminders[0].id, reminders[1].id);
    }

    #[test]
    fn past_due_date_gives_immediately_due_reminders() {
        let reminders =
            Reminder::schedule_for_due_date(&ID::default(), &ID::default(), ReminderKind::PaymentDue, 0, 100);
        assert!(reminders.iter().all(|r| r.is_due(100)));
    }

    #[test]
    fn claimable_only_when_due_and_not_terminal() {
        let mut r = Reminder::new(
            ID::default(),
            ID::default(),
            ReminderKind::PaymentDue,
            ReminderChannel::InApp,
            1000,
            0,
        );
        assert!(!r.is_claimable(999, 0));
        assert!(r.is_claimable(1000, 0));

        r.claim(1000);
        assert_eq!(r.version, 1);
        assert!(!r.is_claimable(1500, 999));
        // Claim abandoned long ago
        assert!(r.is_claimable(1500, 1000));

        r.mark_sent(1200);
        assert!(r.status.is_terminal());
        assert!(!r.is_claimable(5000, 5000));

        let mut cancelled = r.clone();
        cancelled.cancel();
        assert!(!cancelled.is_claimable(5000, 5000));
    }

    #[test]
    fn templates_per_kind() {
        assert_eq!(ReminderKind::PaymentDue.email_subject(), "Payment Due SOON");
        assert_eq!(ReminderKind::DeliverableDue.email_subject(), "Deliverable Due SOON");
        assert_eq!(ReminderKind::PublishDate.email_subject(), "Publish Date Upcoming");
        assert_eq!(ReminderKind::PaymentDue.notification_title(), "Payment Due");
        assert_eq!(ReminderKind::DeliverableDue.notification_title(), "Deliverable Due");
        assert_eq!(ReminderKind::PublishDate.notification_title(), "Publish Date");
    }

    #[test]
    fn parses_persisted_values() {
        for kind in &ReminderKind::ALL {
            assert_eq!(kind.as_str().parse::<ReminderKind>().unwrap(), *kind);
        }
        assert_eq!("IN_APP".parse::<ReminderChannel>().unwrap(), ReminderChannel::InApp);
        assert_eq!("SENT".parse::<ReminderStatus>().unwrap(), ReminderStatus::Sent);
        assert!("SMS".parse::<ReminderChannel>().is_err());
        assert!("payment-due".parse::<ReminderKind>().is_err());
    }

    #[test]
    fn undelivered_reminders_are_retried_after_fresh_ones() {
        let reminder = |scheduled_for| {
            Reminder::new(
                ID::default(),
                ID::default(),
                ReminderKind::PaymentDue,
                ReminderChannel::InApp,
                scheduled_for,
                0,
            )
        };
        let mut old_deferred = reminder(10);
        old_deferred.defer(500);
        let mut old_released = reminder(20);
        old_released.claim(400);
        old_released.release(450);
        assert_eq!(old_released.status, ReminderStatus::Pending);
        assert_eq!(old_released.last_attempt_at, Some(450));
        let fresh = reminder(300);

        let mut due = vec![old_deferred.clone(), fresh.clone(), old_released.clone()];
        due.sort_by_key(|r| r.retry_order());
        assert_eq!(due, vec![fresh, old_released, old_deferred]);
    }
}
