// In memory implementation of the EmailSender port. Records every message it accepts.

use crate::shared::infrastructure::email_sender::{EmailError, EmailMessage, EmailSender};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEmailSender {
    pub sent: Mutex<Vec<EmailMessage>>,
    is_offline: bool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        if self.is_offline {
            return Err(EmailError::Backend("Email sender offline".into()));
        }
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}
