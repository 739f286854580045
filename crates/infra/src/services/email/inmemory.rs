use super::IEmailSender;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Records every email instead of sending it. Can be switched into a
/// failing mode to simulate provider outages.
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail: AtomicBool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for InMemoryEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEmailSender for InMemoryEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Email provider unavailable"));
        }
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| anyhow::anyhow!("Sent email log poisoned"))?;
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
