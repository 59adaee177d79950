// Caller identity as asserted by the authenticating gateway in front of the service.
//
// The gateway verifies the token and forwards the caller's role claim in a header.
// Requests that reach the service without it carry no role.

use axum::http::HeaderMap;

use crate::modules::roles::use_cases::set_user_role::command::CallerClaims;

pub const CALLER_ROLE_HEADER: &str = "x-caller-role";

pub fn caller_claims(headers: &HeaderMap) -> CallerClaims {
    CallerClaims {
        role: headers
            .get(CALLER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
    }
}
