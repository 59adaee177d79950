// In memory implementation of the DailySummaryStore port and the daily summary queries.
//
// Purpose
// - Support handler tests and local development without a document database.
//
// Responsibilities
// - Keep summaries in a map guarded by one mutex; the merge runs while the lock is held.
// - Simulate a full outage or a failure on a single key.

use crate::modules::metrics::core::adjustment::{Delta, SummaryKey};
use crate::modules::metrics::core::summary::{DailySummary, DailySummaryView};
use crate::modules::metrics::use_cases::get_daily_summary::queries_port::DailySummaryQueries;
use crate::shared::core::primitives::DateKey;
use crate::shared::infrastructure::daily_summary_store::{DailySummaryStore, SummaryStoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDailySummaryStore {
    summaries: Mutex<HashMap<SummaryKey, DailySummary>>,
    failing_keys: HashSet<SummaryKey>,
    is_offline: bool,
}

impl InMemoryDailySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Make every increment on `key` fail while other keys keep working.
    pub fn fail_on(&mut self, key: SummaryKey) {
        self.failing_keys.insert(key);
    }

    pub async fn summary(&self, key: &SummaryKey) -> Option<DailySummary> {
        self.summaries.lock().await.get(key).copied()
    }

    pub async fn len(&self) -> usize {
        self.summaries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.summaries.lock().await.is_empty()
    }
}

#[async_trait]
impl DailySummaryStore for InMemoryDailySummaryStore {
    async fn increment(&self, key: &SummaryKey, delta: Delta) -> Result<(), SummaryStoreError> {
        if self.is_offline {
            return Err(SummaryStoreError::Backend(
                "Daily summary store offline".into(),
            ));
        }
        if self.failing_keys.contains(key) {
            return Err(SummaryStoreError::Backend(format!(
                "write rejected for {key}"
            )));
        }

        let mut guard = self.summaries.lock().await;
        let mut merged = guard.get(key).copied().unwrap_or_default();
        merged
            .merge(delta, Utc::now().timestamp_millis())
            .map_err(|_| SummaryStoreError::Overflow {
                key: key.to_string(),
            })?;
        guard.insert(key.clone(), merged);
        Ok(())
    }
}

#[async_trait]
impl DailySummaryQueries for InMemoryDailySummaryStore {
    async fn get_daily_summary(
        &self,
        business_id: &str,
        date_key: DateKey,
    ) -> anyhow::Result<Option<DailySummaryView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Daily summary store offline"));
        }

        let key = SummaryKey::new(business_id, date_key);
        Ok(self
            .summaries
            .lock()
            .await
            .get(&key)
            .map(|summary| DailySummaryView::new(&key, summary)))
    }

    async fn list_daily_summaries(
        &self,
        business_id: &str,
        from: DateKey,
        to: DateKey,
    ) -> anyhow::Result<Vec<DailySummaryView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Daily summary store offline"));
        }

        let guard = self.summaries.lock().await;
        let mut items: Vec<DailySummaryView> = guard
            .iter()
            .filter(|(key, _)| {
                key.business_id == business_id && key.date_key >= from && key.date_key <= to
            })
            .map(|(key, summary)| DailySummaryView::new(key, summary))
            .collect();
        items.sort_by_key(|view| view.date_key);
        Ok(items)
    }
}
