//! Resend HTTP adapter for the [`EmailSender`] port.
//!
//! POSTs the message as JSON to the configured endpoint with a bearer token.
//! Any non-2xx response is an error; the body is kept for logging.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::shared::infrastructure::email_sender::{EmailError, EmailMessage, EmailSender};

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend sender configuration.
#[derive(Clone)]
pub struct ResendConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub struct ResendEmailSender {
    client: Client,
    config: ResendConfig,
}

impl ResendEmailSender {
    pub fn new(config: ResendConfig) -> Result<Self, EmailError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        })
    }
}
