use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::appointments::core::change::AppointmentWritten;
use crate::modules::notifications::use_cases::send_appointment_confirmation::handler::ConfirmationOutcome;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ConfirmationResponse {
    pub outcome: ConfirmationOutcome,
}

/// Dispatcher trigger for a newly created appointment document. Always accepted, the
/// confirmation is best effort.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AppointmentWritten>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let outcome = state.confirmation_handler.handle(&event).await;
    (StatusCode::ACCEPTED, Json(ConfirmationResponse { outcome })).into_response()
}
