// Snapshot of an appointment document as delivered by the change dispatcher.
//
// Purpose
// - Carry the fields the metrics and notification paths read: start instant, price, customer address.
//
// Timestamps
// - `startAt` is RFC 3339 on the wire and compared at millisecond precision.

use crate::shared::core::primitives::DateKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub start_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

impl AppointmentRecord {
    /// Price in cents with an absent price counted as zero.
    pub fn price(&self) -> i64 {
        i64::from(self.price_cents.unwrap_or(0))
    }

    pub fn date_key(&self) -> DateKey {
        DateKey::from_instant(&self.start_at)
    }

    pub fn start_at_millis(&self) -> i64 {
        self.start_at.timestamp_millis()
    }
}
