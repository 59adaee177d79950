// Daily summary read model.
//
// Purpose
// - Hold the per (business, day) appointment count and revenue derived from appointment changes.
//
// Responsibilities
// - Start from zero when the first delta for a key arrives.
// - Record the store assigned timestamp of the last successful merge.
// - Refuse a delta that would overflow either total; the summary is left as it was.

use crate::modules::metrics::core::adjustment::{Delta, SummaryKey};
use crate::shared::core::primitives::DateKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("delta {count}/{revenue_cents} overflows the daily summary")]
pub struct SummaryOverflow {
    pub count: i64,
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub appointments_count: i64,
    pub revenue_cents: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

impl DailySummary {
    pub fn merge(&mut self, delta: Delta, updated_at: i64) -> Result<(), SummaryOverflow> {
        let overflow = || SummaryOverflow {
            count: delta.count,
            revenue_cents: delta.revenue_cents,
        };
        let appointments_count = self
            .appointments_count
            .checked_add(delta.count)
            .ok_or_else(overflow)?;
        let revenue_cents = self
            .revenue_cents
            .checked_add(delta.revenue_cents)
            .ok_or_else(overflow)?;

        self.appointments_count = appointments_count;
        self.revenue_cents = revenue_cents;
        self.updated_at = updated_at;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryView {
    pub business_id: String,
    pub date_key: DateKey,
    pub appointments_count: i64,
    pub revenue_cents: i64,
    pub updated_at: i64,
}

impl DailySummaryView {
    pub fn new(key: &SummaryKey, summary: &DailySummary) -> Self {
        Self {
            business_id: key.business_id.clone(),
            date_key: key.date_key,
            appointments_count: summary.appointments_count,
            revenue_cents: summary.revenue_cents,
            updated_at: summary.updated_at,
        }
    }
}
