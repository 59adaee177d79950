// A document change on an appointment, as handed over by the dispatcher.
//
// Purpose
// - Pair the before and after snapshots with the business and appointment identifiers.
// - Classify the change into exactly one kind so downstream use cases can match on it.

use crate::modules::appointments::core::record::AppointmentRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWritten {
    pub business_id: String,
    pub appointment_id: String,
    #[serde(default)]
    pub before: Option<AppointmentRecord>,
    #[serde(default)]
    pub after: Option<AppointmentRecord>,
}

impl AppointmentWritten {
    pub fn kind(&self) -> ChangeKind {
        classify(self.before.as_ref(), self.after.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Deleted,
    /// Both snapshots exist and `startAt` differs at millisecond precision.
    Rescheduled,
    /// Both snapshots exist and `startAt` is unchanged.
    Edited,
    /// Neither snapshot exists; a dispatcher should never deliver this.
    Invalid,
}

pub fn classify(before: Option<&AppointmentRecord>, after: Option<&AppointmentRecord>) -> ChangeKind {
    match (before, after) {
        (None, Some(_)) => ChangeKind::Created,
        (Some(_), None) => ChangeKind::Deleted,
        (Some(b), Some(a)) if b.start_at_millis() != a.start_at_millis() => ChangeKind::Rescheduled,
        (Some(_), Some(_)) => ChangeKind::Edited,
        (None, None) => ChangeKind::Invalid,
    }
}
