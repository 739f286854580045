mod http;
mod inmemory;

pub use http::HttpEmailSender;
pub use inmemory::{InMemoryEmailSender, SentEmail};
use tracing::info;

/// Outbound channel for reminder emails. Implementations log their own
/// failures, callers only need to know whether the email went out.
#[async_trait::async_trait]
pub trait IEmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()>;
}

/// Used when no email provider is configured
pub struct LogEmailSender {}

#[async_trait::async_trait]
impl IEmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, _html: &str) -> anyhow::Result<()> {
        info!(to = %to, subject = %subject, "Email provider not configured, skipping email");
        Ok(())
    }
}
