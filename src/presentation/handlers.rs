// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::web_renderer::DashboardView;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct StressQuery {
    pub seconds: Option<u32>,
    pub intensity: Option<f64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current rendered dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.view.read().clone())
}

/// "Start stress" trigger. Answers before the backend does.
pub async fn start_stress(
    Query(query): Query<StressQuery>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    let seconds = query.seconds.unwrap_or(state.stress_defaults.default_seconds);
    let intensity = query
        .intensity
        .unwrap_or(state.stress_defaults.default_intensity);

    state.stress.start(seconds, intensity);
    StatusCode::ACCEPTED
}

/// "Stop stress" trigger
pub async fn stop_stress(State(state): State<Arc<AppState>>) -> StatusCode {
    state.stress.stop();
    StatusCode::ACCEPTED
}
