// Shared test fixtures for appointment snapshots and dispatcher events.

use crate::modules::appointments::core::change::AppointmentWritten;
use crate::modules::appointments::core::record::AppointmentRecord;
use chrono::{DateTime, Utc};
use std::fs;

pub const BUSINESS_ID: &str = "biz1";
pub const APPOINTMENT_ID: &str = "appt-fixed-0001";

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub struct AppointmentRecordBuilder {
    inner: AppointmentRecord,
}

impl Default for AppointmentRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AppointmentRecordBuilder {
    /// Starts from the canonical record: 2024-03-01T10:00Z, 5000 cents.
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/appointment_record.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn start_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_at = v;
        self
    }

    pub fn price_cents(mut self, v: Option<u32>) -> Self {
        self.inner.price_cents = v;
        self
    }

    pub fn customer_email(mut self, v: Option<&str>) -> Self {
        self.inner.customer_email = v.map(str::to_string);
        self
    }

    pub fn build(self) -> AppointmentRecord {
        self.inner
    }
}

pub fn appointment_written(
    before: Option<AppointmentRecord>,
    after: Option<AppointmentRecord>,
) -> AppointmentWritten {
    AppointmentWritten {
        business_id: BUSINESS_ID.to_string(),
        appointment_id: APPOINTMENT_ID.to_string(),
        before,
        after,
    }
}

#[cfg(test)]
mod appointment_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AppointmentRecordBuilder::default().build();
        assert_eq!(built.start_at, at("2024-03-01T10:00:00Z"));
        assert_eq!(built.price_cents, Some(5000));
        assert_eq!(built.customer_email.as_deref(), Some("customer@example.com"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AppointmentRecordBuilder::new()
            .start_at(at("2024-05-05T05:05:05Z"))
            .price_cents(None)
            .customer_email(None)
            .build();
        assert_eq!(custom.start_at, at("2024-05-05T05:05:05Z"));
        assert_eq!(custom.price_cents, None);
        assert_eq!(custom.customer_email, None);
    }
}
