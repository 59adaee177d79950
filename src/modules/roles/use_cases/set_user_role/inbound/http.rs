use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::roles::use_cases::set_user_role::command::SetUserRole;
use crate::modules::roles::use_cases::set_user_role::decide::GateError;
use crate::modules::roles::use_cases::set_user_role::handler::ApplicationError;
use crate::shell::auth::caller_claims;
use crate::shell::response::ErrorBody;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SetUserRoleResponse {
    pub ok: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SetUserRole>, JsonRejection>,
) -> impl IntoResponse {
    let caller = caller_claims(&headers);
    // An unreadable body carries no arguments; the gate still judges the caller first.
    let command = match body {
        Ok(Json(command)) => command,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable set-user-role body");
            SetUserRole::default()
        }
    };

    match state.set_user_role_handler.handle(&caller, command).await {
        Ok(()) => (StatusCode::OK, Json(SetUserRoleResponse { ok: true })).into_response(),
        Err(e) => {
            let status = match &e {
                ApplicationError::Gate(GateError::PermissionDenied) => StatusCode::FORBIDDEN,
                ApplicationError::Gate(_) => StatusCode::BAD_REQUEST,
                ApplicationError::Identity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorBody::new(e.code(), e.to_string()))).into_response()
        }
    }
}
