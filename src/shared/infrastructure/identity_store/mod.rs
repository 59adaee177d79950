// Port for the identity provider that holds per user custom claims.
//
// Contract
// - `set_custom_claims` replaces the claims of `uid` in one call.

pub mod in_memory;

use crate::modules::roles::core::claims::UserClaims;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn set_custom_claims(
        &self,
        uid: &str,
        claims: &UserClaims,
    ) -> Result<(), IdentityStoreError>;
}
