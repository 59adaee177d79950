use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::modules::metrics::use_cases::aggregate_appointment_change::inbound::http as aggregate_http;
use crate::modules::metrics::use_cases::get_daily_summary::inbound::http as summary_http;
use crate::modules::notifications::use_cases::send_appointment_confirmation::inbound::http as confirmation_http;
use crate::modules::roles::use_cases::set_user_role::inbound::http as set_role_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/triggers/appointment-written",
            post(aggregate_http::handle),
        )
        .route(
            "/triggers/appointment-created",
            post(confirmation_http::handle),
        )
        .route("/set-user-role", post(set_role_http::handle))
        .route(
            "/businesses/{business_id}/metrics-daily",
            get(summary_http::list),
        )
        .route(
            "/businesses/{business_id}/metrics-daily/{date_key}",
            get(summary_http::get_one),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
