use crate::modules::metrics::use_cases::aggregate_appointment_change::handler::AggregateAppointmentChangeHandler;
use crate::modules::metrics::use_cases::get_daily_summary::queries_port::DailySummaryQueries;
use crate::modules::notifications::use_cases::send_appointment_confirmation::handler::SendAppointmentConfirmationHandler;
use crate::modules::roles::use_cases::set_user_role::handler::SetUserRoleHandler;
use crate::shared::infrastructure::daily_summary_store::in_memory::InMemoryDailySummaryStore;
use crate::shared::infrastructure::identity_store::in_memory::InMemoryIdentityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<dyn DailySummaryQueries + Send + Sync>,
    pub aggregate_handler: Arc<AggregateAppointmentChangeHandler<InMemoryDailySummaryStore>>,
    pub confirmation_handler: Arc<SendAppointmentConfirmationHandler>,
    pub set_user_role_handler: Arc<SetUserRoleHandler<InMemoryIdentityStore>>,
}
