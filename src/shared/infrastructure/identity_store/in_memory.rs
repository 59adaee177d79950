// In memory implementation of the IdentityStore port for tests and local development.

use crate::modules::roles::core::claims::UserClaims;
use crate::shared::infrastructure::identity_store::{IdentityStore, IdentityStoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryIdentityStore {
    claims: RwLock<HashMap<String, UserClaims>>,
    is_offline: bool,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn claims(&self, uid: &str) -> Option<UserClaims> {
        self.claims.read().await.get(uid).cloned()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn set_custom_claims(
        &self,
        uid: &str,
        claims: &UserClaims,
    ) -> Result<(), IdentityStoreError> {
        if self.is_offline {
            return Err(IdentityStoreError::Backend("Identity store offline".into()));
        }

        self.claims
            .write()
            .await
            .insert(uid.to_string(), claims.clone());
        Ok(())
    }
}
