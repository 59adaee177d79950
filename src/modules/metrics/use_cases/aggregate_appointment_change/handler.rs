// Metrics aggregation handler orchestrates the write side of the daily summaries.
//
// Responsibilities
// - Decide the adjustments for one appointment change.
// - Apply them one by one through the store's atomic increment, in decision order.
// - Stop at the first failing increment and report how far it got. Nothing is rolled back
//   and nothing is retried here; redelivery belongs to the dispatcher.
//
// Delivery
// - Applying the same change twice counts it twice.

use crate::modules::appointments::core::change::{AppointmentWritten, ChangeKind};
use crate::modules::metrics::core::adjustment::Adjustment;
use crate::modules::metrics::use_cases::aggregate_appointment_change::decide::decide_adjustments;
use crate::shared::infrastructure::daily_summary_store::{DailySummaryStore, SummaryStoreError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{applied} of {total} summary adjustments applied before the store failed: {source}")]
    Store {
        applied: usize,
        total: usize,
        #[source]
        source: SummaryStoreError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    pub kind: ChangeKind,
    pub applied: Vec<Adjustment>,
}

pub struct AggregateAppointmentChangeHandler<TStore>
where
    TStore: DailySummaryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AggregateAppointmentChangeHandler<TStore>
where
    TStore: DailySummaryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "aggregate_appointment_change",
        skip_all,
        fields(business_id = %event.business_id, appointment_id = %event.appointment_id)
    )]
    pub async fn handle(
        &self,
        event: &AppointmentWritten,
    ) -> Result<AggregationReport, ApplicationError> {
        let kind = event.kind();
        if kind == ChangeKind::Invalid {
            tracing::warn!("change carries neither a before nor an after snapshot, ignoring");
        }

        let adjustments = decide_adjustments(event);
        let total = adjustments.len();
        let mut applied = Vec::with_capacity(total);

        for adjustment in adjustments {
            if let Err(source) = self.store.increment(&adjustment.key, adjustment.delta).await {
                tracing::error!(
                    summary = %adjustment.key,
                    applied = applied.len(),
                    total,
                    error = %source,
                    "daily summary increment failed"
                );
                return Err(ApplicationError::Store {
                    applied: applied.len(),
                    total,
                    source,
                });
            }
            tracing::debug!(
                summary = %adjustment.key,
                count = adjustment.delta.count,
                revenue_cents = adjustment.delta.revenue_cents,
                "daily summary incremented"
            );
            applied.push(adjustment);
        }

        tracing::info!(?kind, adjustments = total, "appointment change aggregated");
        Ok(AggregationReport { kind, applied })
    }
}
