use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::appointments::core::change::AppointmentWritten;
use crate::shell::response::ErrorBody;
use crate::shell::state::AppState;

/// Dispatcher trigger for any write on an appointment document.
///
/// A 5xx asks the dispatcher to redeliver; a malformed body is answered with 422 since
/// redelivering it cannot succeed.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AppointmentWritten>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed appointment change");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.aggregate_handler.handle(&event).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("unavailable", e.to_string())),
        )
            .into_response(),
    }
}
