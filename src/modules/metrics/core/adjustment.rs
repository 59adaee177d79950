// Signed adjustments to daily summaries.
//
// Purpose
// - Name a daily summary by (business, UTC date) and describe how much to add to it.
//
// Responsibilities
// - Build the +1/+price and -1/-price deltas from an appointment snapshot.
// - Stay free of input or output; the store applies deltas atomically.

use crate::modules::appointments::core::record::AppointmentRecord;
use crate::shared::core::primitives::DateKey;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryKey {
    pub business_id: String,
    pub date_key: DateKey,
}

impl SummaryKey {
    pub fn new(business_id: impl Into<String>, date_key: DateKey) -> Self {
        Self {
            business_id: business_id.into(),
            date_key,
        }
    }

    pub fn for_record(business_id: &str, record: &AppointmentRecord) -> Self {
        Self::new(business_id, record.date_key())
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "businesses/{}/metrics_daily/{}", self.business_id, self.date_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    pub count: i64,
    pub revenue_cents: i64,
}

impl Delta {
    pub fn addition(record: &AppointmentRecord) -> Self {
        Self {
            count: 1,
            revenue_cents: record.price(),
        }
    }

    pub fn removal(record: &AppointmentRecord) -> Self {
        Self {
            count: -1,
            revenue_cents: -record.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub key: SummaryKey,
    pub delta: Delta,
}

impl Adjustment {
    /// +1 appointment and +price on the day `record` starts.
    pub fn addition(business_id: &str, record: &AppointmentRecord) -> Self {
        Self {
            key: SummaryKey::for_record(business_id, record),
            delta: Delta::addition(record),
        }
    }

    /// -1 appointment and -price on the day `record` starts.
    pub fn removal(business_id: &str, record: &AppointmentRecord) -> Self {
        Self {
            key: SummaryKey::for_record(business_id, record),
            delta: Delta::removal(record),
        }
    }
}
