// Pure decision function for appointment confirmations.
//
// Rules
// - Only a newly created appointment is confirmed.
// - The appointment must carry a non-empty customer address.
// - The start instant is rendered in UTC.

use crate::modules::appointments::core::change::{AppointmentWritten, ChangeKind};
use crate::shared::infrastructure::email_sender::EmailMessage;

pub const CONFIRMATION_SUBJECT: &str = "Appointment Confirmation";

pub fn decide_confirmation(event: &AppointmentWritten, from: &str) -> Option<EmailMessage> {
    if event.kind() != ChangeKind::Created {
        return None;
    }
    let appointment = event.after.as_ref()?;
    let address = appointment
        .customer_email
        .as_deref()
        .map(str::trim)
        .filter(|address| !address.is_empty())?;

    Some(EmailMessage {
        from: from.to_string(),
        to: vec![address.to_string()],
        subject: CONFIRMATION_SUBJECT.to_string(),
        html: format!(
            "<p>Your appointment is confirmed for {}</p>",
            appointment.start_at.format("%Y-%m-%d %H:%M UTC")
        ),
    })
}
