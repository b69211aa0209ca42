// Stress controller - One-shot commands to the backend load scenario
use crate::application::events::{ClientEvent, EventSink, StressCommand};
use crate::application::telemetry_backend::TelemetryBackend;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct StressController {
    backend: Arc<dyn TelemetryBackend>,
    sink: Arc<dyn EventSink>,
}

impl StressController {
    pub fn new(backend: Arc<dyn TelemetryBackend>, sink: Arc<dyn EventSink>) -> Self {
        Self { backend, sink }
    }

    /// Fire-and-forget start. The outcome goes to the event sink; the handle
    /// may be dropped.
    pub fn start(&self, seconds: u32, intensity: f64) -> JoinHandle<()> {
        let command = StressCommand::Start {
            seconds: seconds.max(1),
            intensity: if intensity.is_finite() {
                intensity.clamp(0.0, 1.0)
            } else {
                0.0
            },
        };
        self.dispatch(command)
    }

    pub fn stop(&self) -> JoinHandle<()> {
        self.dispatch(StressCommand::Stop)
    }

    fn dispatch(&self, command: StressCommand) -> JoinHandle<()> {
        let backend = self.backend.clone();
        let sink = self.sink.clone();

        tokio::spawn(async move {
            let result = match command {
                StressCommand::Start { seconds, intensity } => {
                    backend.start_stress(seconds, intensity).await
                }
                StressCommand::Stop => backend.stop_stress().await,
            };

            let event = match result {
                Ok(()) => ClientEvent::StressCommandSucceeded { command },
                Err(e) => ClientEvent::StressCommandFailed {
                    command,
                    reason: e.to_string(),
                },
            };
            sink.emit(event);
        })
    }
}
