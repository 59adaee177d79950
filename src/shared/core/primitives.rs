// Shared value types used across the bookings modules.
//
// DateKey
// - A calendar day in UTC, rendered as `YYYY-MM-DD`.
// - Derived from an absolute instant by truncation in UTC, never in the host time zone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid date key '{0}', expected YYYY-MM-DD")]
pub struct DateKeyError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_instant(instant: &DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    pub fn parse(value: &str) -> Result<Self, DateKeyError> {
        let date = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map_err(|_| DateKeyError(value.to_string()))?;
        let key = Self(date);
        // chrono accepts unpadded months and days; keys are always zero padded
        if key.to_string() != value {
            return Err(DateKeyError(value.to_string()));
        }
        Ok(key)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}
