// Port for the outbound email service.
//
// Contract
// - `send` delivers one message or reports why it could not.
// - Callers decide what a failure means; this port never retries.

pub mod in_memory;
pub mod resend;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email service responded with {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}
