use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use bookings::modules::metrics::use_cases::aggregate_appointment_change::handler::AggregateAppointmentChangeHandler;
use bookings::modules::notifications::use_cases::send_appointment_confirmation::handler::SendAppointmentConfirmationHandler;
use bookings::modules::roles::use_cases::set_user_role::handler::SetUserRoleHandler;
use bookings::shared::infrastructure::daily_summary_store::in_memory::InMemoryDailySummaryStore;
use bookings::shared::infrastructure::email_sender::EmailSender;
use bookings::shared::infrastructure::email_sender::resend::ResendEmailSender;
use bookings::shared::infrastructure::identity_store::in_memory::InMemoryIdentityStore;
use bookings::shell::config::AppConfig;
use bookings::shell::http::router;
use bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let summaries = Arc::new(InMemoryDailySummaryStore::new());
    let identities = Arc::new(InMemoryIdentityStore::new());

    let email_sender: Option<Arc<dyn EmailSender>> = match &config.resend {
        Some(resend) => {
            let sender: Arc<dyn EmailSender> = Arc::new(ResendEmailSender::new(resend.clone())?);
            Some(sender)
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set, appointment confirmations are disabled");
            None
        }
    };

    let state = AppState {
        summaries: summaries.clone(),
        aggregate_handler: Arc::new(AggregateAppointmentChangeHandler::new(summaries)),
        confirmation_handler: Arc::new(SendAppointmentConfirmationHandler::new(
            email_sender,
            config.notification_from.clone(),
        )),
        set_user_role_handler: Arc::new(SetUserRoleHandler::new(identities)),
    };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
