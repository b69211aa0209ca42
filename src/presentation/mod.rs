// Presentation layer - Local view server for the dashboard
pub mod app_state;
pub mod handlers;
pub mod web_renderer;
