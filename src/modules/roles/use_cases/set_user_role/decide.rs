// Pure decision function for role assignment.
//
// Rules, checked in this order
// - The caller must hold the admin role.
// - uid and businessId must be present.
// - role must be one of admin, employee, client.
// - Never perform input or output.

use crate::modules::roles::core::claims::{Role, UserClaims};
use crate::modules::roles::use_cases::set_user_role::command::{CallerClaims, SetUserRole};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Admins only")]
    PermissionDenied,
    #[error("Missing args")]
    MissingArguments,
    #[error("Invalid role")]
    InvalidRole,
}

impl GateError {
    pub fn code(&self) -> &'static str {
        match self {
            GateError::PermissionDenied => "permission-denied",
            GateError::MissingArguments | GateError::InvalidRole => "invalid-argument",
        }
    }
}

pub fn decide_set_user_role(
    caller: &CallerClaims,
    command: SetUserRole,
) -> Result<UserClaims, GateError> {
    if caller.role.as_deref() != Some(Role::Admin.as_str()) {
        return Err(GateError::PermissionDenied);
    }
    if command.uid.trim().is_empty() || command.business_id.trim().is_empty() {
        return Err(GateError::MissingArguments);
    }
    let role = command
        .role
        .parse::<Role>()
        .map_err(|_| GateError::InvalidRole)?;
    Ok(UserClaims {
        business_id: command.business_id,
        role,
    })
}
