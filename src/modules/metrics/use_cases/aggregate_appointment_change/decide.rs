// Pure decision function for daily metrics.
//
// Purpose
// - Turn one appointment change into the ordered list of summary adjustments it requires.
//
// Rules
// - Created: +1/+price on the new day.
// - Deleted: -1/-price on the old day.
// - Rescheduled (startAt differs at millisecond precision): removal on the old day, then
//   addition on the new day. Both can land on the same day.
// - Edited (startAt unchanged): nothing, even when the price changed.
// - Invalid (no snapshots): nothing.
// - Never perform input or output.

use crate::modules::appointments::core::change::{AppointmentWritten, ChangeKind};
use crate::modules::metrics::core::adjustment::Adjustment;

pub fn decide_adjustments(event: &AppointmentWritten) -> Vec<Adjustment> {
    let business_id = event.business_id.as_str();
    let removal = event
        .before
        .as_ref()
        .map(|record| Adjustment::removal(business_id, record));
    let addition = event
        .after
        .as_ref()
        .map(|record| Adjustment::addition(business_id, record));

    match event.kind() {
        ChangeKind::Created | ChangeKind::Deleted | ChangeKind::Rescheduled => {
            removal.into_iter().chain(addition).collect()
        }
        ChangeKind::Edited | ChangeKind::Invalid => Vec::new(),
    }
}
