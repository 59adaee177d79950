// Application state wired with in memory adapters, for router level tests.

use crate::modules::metrics::use_cases::aggregate_appointment_change::handler::AggregateAppointmentChangeHandler;
use crate::modules::notifications::use_cases::send_appointment_confirmation::handler::SendAppointmentConfirmationHandler;
use crate::modules::roles::use_cases::set_user_role::handler::SetUserRoleHandler;
use crate::shared::infrastructure::daily_summary_store::in_memory::InMemoryDailySummaryStore;
use crate::shared::infrastructure::identity_store::in_memory::InMemoryIdentityStore;
use crate::shell::config::DEFAULT_NOTIFICATION_FROM;
use crate::shell::state::AppState;
use std::sync::Arc;

/// Notifications are disabled; tests that need them swap in their own handler.
pub fn make_test_state(store: InMemoryDailySummaryStore) -> AppState {
    make_test_state_with(Arc::new(store), Arc::new(InMemoryIdentityStore::new()))
}

pub fn make_test_state_with(
    store: Arc<InMemoryDailySummaryStore>,
    identities: Arc<InMemoryIdentityStore>,
) -> AppState {
    AppState {
        summaries: store.clone(),
        aggregate_handler: Arc::new(AggregateAppointmentChangeHandler::new(store)),
        confirmation_handler: Arc::new(SendAppointmentConfirmationHandler::new(
            None,
            DEFAULT_NOTIFICATION_FROM,
        )),
        set_user_role_handler: Arc::new(SetUserRoleHandler::new(identities)),
    }
}
