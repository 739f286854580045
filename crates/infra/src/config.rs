use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Endpoint of the transactional email API
    pub api_url: String,
    pub api_key: String,
    /// Sender, e.g. "Dealdesk <reminders@dealdesk.app>"
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Email provider settings. When missing, emails are only logged.
    pub email: Option<EmailConfig>,
    /// Max number of `Reminder`s handled by one check
    pub reminder_batch_size: usize,
    /// How often the `check-reminders` job fires
    pub reminder_check_interval_millis: i64,
    /// How often the job queue consumer looks for due jobs
    pub queue_poll_interval_millis: u64,
    /// Upper bound for a single email dispatch so one slow provider call
    /// cannot stall the whole check past the next trigger
    pub email_timeout_millis: u64,
    /// A `Reminder` claimed longer ago than this is considered abandoned
    /// by a crashed worker and may be claimed again
    pub reminder_claim_timeout_millis: i64,
}

const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_EMAIL_FROM: &str = "Dealdesk <reminders@dealdesk.app>";

fn parse_value_or<T, F>(key: &str, value: Option<String>, default: T, is_valid: F) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&T) -> bool,
{
    let value = match value {
        Some(value) => value,
        None => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) if is_valid(&parsed) => parsed,
        _ => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

fn parse_env_or<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    parse_value_or(key, std::env::var(key).ok(), default, |_| true)
}

/// Intervals, timeouts and sizes where zero or less would stall or crash
/// the reminder pipeline
fn parse_positive_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd + Default,
{
    parse_value_or(key, std::env::var(key).ok(), default, |v| *v > T::default())
}

impl Config {
    pub fn new() -> Self {
        let email = match std::env::var("EMAIL_API_KEY") {
            Ok(api_key) => Some(EmailConfig {
                api_url: std::env::var("EMAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.into()),
                api_key,
                from: std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.into()),
            }),
            Err(_) => {
                info!("Did not find EMAIL_API_KEY environment variable. Reminder emails will only be logged.");
                None
            }
        };

        Self {
            port: parse_env_or("PORT", 5000),
            email,
            reminder_batch_size: parse_positive_env_or("REMINDER_BATCH_SIZE", 100),
            reminder_check_interval_millis: parse_positive_env_or(
                "REMINDER_CHECK_INTERVAL_MILLIS",
                1000 * 60 * 5,
            ),
            queue_poll_interval_millis: parse_positive_env_or("QUEUE_POLL_INTERVAL_MILLIS", 1000 * 5),
            email_timeout_millis: parse_positive_env_or("EMAIL_TIMEOUT_MILLIS", 1000 * 10),
            reminder_claim_timeout_millis: parse_positive_env_or(
                "REMINDER_CLAIM_TIMEOUT_MILLIS",
                1000 * 60 * 10,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(value: &str, default: i64) -> i64 {
        parse_value_or("INTERVAL", Some(value.into()), default, |v| *v > 0)
    }

    #[test]
    fn falls_back_on_non_positive_intervals() {
        assert_eq!(positive("60000", 300_000), 60_000);
        assert_eq!(positive("0", 300_000), 300_000);
        assert_eq!(positive("-5", 300_000), 300_000);
        assert_eq!(positive("five minutes", 300_000), 300_000);
    }

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(parse_value_or("PORT", None, 5000, |_| true), 5000);
        assert_eq!(
            parse_value_or("PORT", Some("8080".into()), 5000, |_| true),
            8080
        );
    }
}
