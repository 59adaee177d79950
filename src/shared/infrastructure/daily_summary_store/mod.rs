// Port for the daily summary document store.
//
// Purpose
// - Apply a signed delta to the summary at a (business, date) key as one store side operation.
//
// Contract
// - `increment` is an upsert-merge: a missing summary starts at zero, then the delta is added.
// - The add happens inside the store. Callers never read, modify and write back.
// - The store stamps `updated_at` on every successful merge.
// - A delta that would overflow a total is rejected and nothing is written.

pub mod in_memory;

use crate::modules::metrics::core::adjustment::{Delta, SummaryKey};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryStoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("summary at {key} would overflow")]
    Overflow { key: String },
}

#[async_trait]
pub trait DailySummaryStore: Send + Sync {
    async fn increment(&self, key: &SummaryKey, delta: Delta) -> Result<(), SummaryStoreError>;
}
