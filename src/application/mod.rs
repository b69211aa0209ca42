// Application layer - Use cases driving the dashboard
pub mod dashboard_service;
pub mod events;
pub mod poller;
pub mod presenters;
pub mod renderer;
pub mod stress_controller;
pub mod telemetry_backend;
