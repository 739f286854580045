use super::IEmailSender;
use crate::config::EmailConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Sends emails through a Resend compatible HTTP API
pub struct HttpEmailSender {
    client: Client,
    config: EmailConfig,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

impl HttpEmailSender {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl IEmailSender for HttpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        let request = SendEmailRequest {
            from: &self.config.from,
            to: vec![to],
            subject,
            html,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Email send to {} failed: {:?}", to, e);
                anyhow::Error::new(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Email API responded with {}: {}", status, body);
            return Err(anyhow::anyhow!("Email API responded with {}", status));
        }

        let provider_id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|res| res.id)
            .unwrap_or_default();
        debug!(to = %to, subject = %subject, provider_id = %provider_id, "Email sent");
        Ok(())
    }
}
