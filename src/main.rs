// Main entry point - Dependency injection, poll loop and view server
use std::future::IntoFuture;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use plant_telemetry_client::application::dashboard_service::Dashboard;
use plant_telemetry_client::application::events::{EventSink, TracingSink};
use plant_telemetry_client::application::poller::TelemetryPoller;
use plant_telemetry_client::application::renderer::{NullRenderer, Renderer};
use plant_telemetry_client::application::stress_controller::StressController;
use plant_telemetry_client::application::telemetry_backend::TelemetryBackend;
use plant_telemetry_client::infrastructure::config::load_client_config;
use plant_telemetry_client::infrastructure::http_backend::HttpBackend;
use plant_telemetry_client::presentation::app_state::AppState;
use plant_telemetry_client::presentation::handlers::{get_dashboard, health_check, start_stress, stop_stress};
use plant_telemetry_client::presentation::web_renderer::{SharedView, WebRenderer};

// One logical thread drives the timer, the requests and the view server.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_client_config()?;

    // Create backend (infrastructure layer)
    let backend: Arc<dyn TelemetryBackend> = Arc::new(HttpBackend::new(
        &config.backend.base_url,
        config.backend.request_timeout(),
    )?);
    let sink: Arc<dyn EventSink> = Arc::new(TracingSink);

    // Create dashboard and poller (application layer)
    let view = SharedView::default();
    let renderer: Box<dyn Renderer> = if config.view.enabled {
        Box::new(WebRenderer::new(view.clone()))
    } else {
        Box::new(NullRenderer)
    };
    let dashboard = Arc::new(Mutex::new(Dashboard::new(
        config.poller.history_capacity,
        renderer,
    )));
    let poller = TelemetryPoller::new(
        backend.clone(),
        dashboard,
        sink.clone(),
        config.poller.interval(),
    );

    tracing::info!("Reading telemetry from {}", config.backend.base_url);

    if !config.view.enabled {
        poller.run().await;
        return Ok(());
    }

    let state = Arc::new(AppState {
        view,
        stress: StressController::new(backend, sink),
        stress_defaults: config.stress.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/stress/start", post(start_stress))
        .route("/stress/stop", post(stop_stress))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.view.bind).await?;
    tracing::info!("Serving dashboard view on {}", listener.local_addr()?);

    tokio::select! {
        _ = poller.run() => {}
        served = axum::serve(listener, router).into_future() => served?,
    }

    Ok(())
}
