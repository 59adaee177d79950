// Role assignment handler.
//
// Responsibilities
// - Authorize and validate through the pure decider.
// - Attach the resulting claims to the target identity.
// - Classify every failure with the code returned to the caller.

use crate::modules::roles::use_cases::set_user_role::command::{CallerClaims, SetUserRole};
use crate::modules::roles::use_cases::set_user_role::decide::{GateError, decide_set_user_role};
use crate::shared::infrastructure::identity_store::{IdentityStore, IdentityStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Identity(#[from] IdentityStoreError),
}

impl ApplicationError {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Gate(e) => e.code(),
            ApplicationError::Identity(_) => "internal",
        }
    }
}

pub struct SetUserRoleHandler<TIdentityStore>
where
    TIdentityStore: IdentityStore + 'static,
{
    identity_store: Arc<TIdentityStore>,
}

impl<TIdentityStore> SetUserRoleHandler<TIdentityStore>
where
    TIdentityStore: IdentityStore + 'static,
{
    pub fn new(identity_store: Arc<TIdentityStore>) -> Self {
        Self { identity_store }
    }

    #[tracing::instrument(name = "set_user_role", skip_all, fields(uid = %command.uid, business_id = %command.business_id))]
    pub async fn handle(
        &self,
        caller: &CallerClaims,
        command: SetUserRole,
    ) -> Result<(), ApplicationError> {
        let uid = command.uid.clone();
        let claims = decide_set_user_role(caller, command).inspect_err(|e| {
            tracing::info!(code = e.code(), reason = %e, "role assignment rejected");
        })?;
        self.identity_store
            .set_custom_claims(&uid, &claims)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to store custom claims"))?;
        tracing::info!(role = %claims.role, "role assigned");
        Ok(())
    }
}
