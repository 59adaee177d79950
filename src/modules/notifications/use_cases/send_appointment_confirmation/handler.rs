// Confirmation handler sends a best effort email for a new appointment.
//
// Responsibilities
// - Skip when no email sender is configured or the decider finds nothing to send.
// - Log send failures and report them as an outcome. They are never returned as errors and
//   never retried, so they cannot hold up the metrics path.

use crate::modules::appointments::core::change::AppointmentWritten;
use crate::modules::notifications::use_cases::send_appointment_confirmation::decide::decide_confirmation;
use crate::shared::infrastructure::email_sender::EmailSender;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcome {
    Sent,
    Skipped,
    Failed,
}

pub struct SendAppointmentConfirmationHandler {
    sender: Option<Arc<dyn EmailSender>>,
    from: String,
}

impl SendAppointmentConfirmationHandler {
    pub fn new(sender: Option<Arc<dyn EmailSender>>, from: impl Into<String>) -> Self {
        Self {
            sender,
            from: from.into(),
        }
    }

    #[tracing::instrument(
        name = "send_appointment_confirmation",
        skip_all,
        fields(business_id = %event.business_id, appointment_id = %event.appointment_id)
    )]
    pub async fn handle(&self, event: &AppointmentWritten) -> ConfirmationOutcome {
        let Some(sender) = &self.sender else {
            tracing::debug!("no email sender configured");
            return ConfirmationOutcome::Skipped;
        };
        let Some(message) = decide_confirmation(event, &self.from) else {
            tracing::debug!("nothing to confirm");
            return ConfirmationOutcome::Skipped;
        };

        match sender.send(&message).await {
            Ok(()) => {
                tracing::info!("appointment confirmation sent");
                ConfirmationOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "appointment confirmation not sent");
                ConfirmationOutcome::Failed
            }
        }
    }
}
