//! Real-time plant telemetry client.
//!
//! Polls a sensor backend on a fixed interval, keeps a bounded rolling
//! history per channel, renders KPI tiles, charts and an operational
//! recommendation through a [`Renderer`](application::renderer::Renderer),
//! and forwards stress-scenario commands to the backend.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
