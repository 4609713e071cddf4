use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::analytics::{AnalyticsEvent, AnalyticsSummary, LogEventResponse};
use shared::constants::{
    ANALYTICS_EVENTS_ENDPOINT, ANALYTICS_SUMMARY_ENDPOINT, CONFIG_ENDPOINT,
    INVALID_DETAILS_ERROR, INVALID_EVENT_TYPE_ERROR,
};
use shared::validation::validate_event;
use shared::ClientConfig;
use tracing::{debug, info};
use crate::error::Error;
use crate::models::AnalyticsRecord;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(ANALYTICS_EVENTS_ENDPOINT, post(log_event))
        .route(ANALYTICS_SUMMARY_ENDPOINT, get(get_summary))
        .route(CONFIG_ENDPOINT, get(get_config))
        .route("/api/health_check", get(health_check))
}

/// Stores one funnel event. Clients fire and forget, so the response only matters for debugging.
pub async fn log_event(
    State(state): State<AppState>,
    Json(event): Json<AnalyticsEvent>,
) -> Result<(StatusCode, Json<LogEventResponse>), Error> {
    if let Err(e) = validate_event(&event) {
        debug!("Rejected analytics event {:?}: {}", event.event_type, e.code);
        let message = if e.code == "invalid_details" {
            INVALID_DETAILS_ERROR
        } else {
            INVALID_EVENT_TYPE_ERROR
        };
        return Err(Error::Validation(message));
    }

    let record = AnalyticsRecord::new(event.event_type, event.details);
    let id = record.id;
    info!(
        "📈 {} {}",
        record.event_type,
        record.details.as_deref().unwrap_or("")
    );
    state.store.insert(record).await?;

    Ok((StatusCode::ACCEPTED, Json(LogEventResponse { id: id.to_string() })))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<AnalyticsSummary>, Error> {
    let summary = state.store.summary().await?;
    Ok(Json(summary))
}

pub async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client.as_ref().clone())
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
