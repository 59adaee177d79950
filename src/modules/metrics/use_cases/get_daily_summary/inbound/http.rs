use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::primitives::DateKey;
use crate::shell::response::ErrorBody;
use crate::shell::state::AppState;

fn invalid_date(e: impl ToString) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new("invalid-argument", e.to_string())),
    )
        .into_response()
}

pub async fn get_one(
    State(state): State<AppState>,
    Path((business_id, date_key)): Path<(String, String)>,
) -> impl IntoResponse {
    let date_key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(e) => return invalid_date(e),
    };

    match state.summaries.get_daily_summary(&business_id, date_key).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Deserialize)]
pub struct ListDailySummariesParams {
    pub from: String,
    pub to: String,
}

pub async fn list(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    params: Result<Query<ListDailySummariesParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(e) => return invalid_date(e.body_text()),
    };
    let (from, to) = match (DateKey::parse(&params.from), DateKey::parse(&params.to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => return invalid_date(e),
    };

    match state
        .summaries
        .list_daily_summaries(&business_id, from, to)
        .await
    {
        Ok(views) => Json(views).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
