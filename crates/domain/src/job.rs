use crate::shared::enums::InvalidVariantError;
use std::{fmt::Display, str::FromStr};

/// Background work known to the job queue. Jobs carry no payload, the
/// kind alone tells the consumer what to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Scan for due `Reminder`s and deliver them
    CheckReminders,
}

impl JobKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckReminders => "check-reminders",
        }
    }
}

impl Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JobKind {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check-reminders" => Ok(Self::CheckReminders),
            _ => Err(InvalidVariantError::new("job name", s)),
        }
    }
}

/// A job that the queue fires every `every_millis`. A repeatable job is
/// identified by its kind and interval, registering the same pair twice
/// keeps the existing schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatableJob {
    pub kind: JobKind,
    pub every_millis: i64,
    pub next_run_at: i64,
    pub last_run_at: Option<i64>,
}

impl RepeatableJob {
    /// A new repeatable job which fires for the first time at `now`
    pub fn new(kind: JobKind, every_millis: i64, now: i64) -> Self {
        Self {
            kind,
            every_millis,
            next_run_at: now,
            last_run_at: None,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.next_run_at <= now
    }

    /// A job must repeat after a positive interval
    pub fn is_valid(&self) -> bool {
        self.every_millis > 0
    }

    /// Moves `next_run_at` to the first slot after `now` on the original
    /// cadence. Periods missed while no process was running are skipped
    /// instead of fired back to back.
    pub fn advance(&mut self, now: i64) {
        let every_millis = self.every_millis.max(1);
        let missed_periods = (now - self.next_run_at).max(0) / every_millis;
        self.next_run_at += (missed_periods + 1) * every_millis;
        self.last_run_at = Some(now);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn job_name_roundtrip() {
        assert_eq!(JobKind::CheckReminders.name(), "check-reminders");
        assert_eq!(
            "check-reminders".parse::<JobKind>().unwrap(),
            JobKind::CheckReminders
        );
        assert!("send-invoices".parse::<JobKind>().is_err());
    }

    #[test]
    fn advances_on_cadence() {
        let mut job = RepeatableJob::new(JobKind::CheckReminders, 300, 1000);
        assert!(job.is_due(1000));

        job.advance(1010);
        assert_eq!(job.next_run_at, 1300);
        assert_eq!(job.last_run_at, Some(1010));
        assert!(!job.is_due(1299));

        // Process was down for several periods
        job.advance(2250);
        assert_eq!(job.next_run_at, 2500);
    }

    #[test]
    fn non_positive_interval_is_invalid_and_never_panics() {
        let mut job = RepeatableJob::new(JobKind::CheckReminders, 0, 0);
        assert!(!job.is_valid());
        job.advance(10);
        assert_eq!(job.next_run_at, 11);

        let mut job = RepeatableJob::new(JobKind::CheckReminders, -300, 0);
        assert!(!job.is_valid());
        job.advance(10);
        assert!(job.next_run_at > 10);

        assert!(RepeatableJob::new(JobKind::CheckReminders, 300, 0).is_valid());
    }
}
