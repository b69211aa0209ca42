// Telemetry poller - Fixed-interval fetch loop feeding the dashboard
use crate::application::dashboard_service::Dashboard;
use crate::application::events::{ClientEvent, EventSink};
use crate::application::telemetry_backend::TelemetryBackend;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone)]
pub struct TelemetryPoller {
    backend: Arc<dyn TelemetryBackend>,
    dashboard: Arc<Mutex<Dashboard>>,
    sink: Arc<dyn EventSink>,
    interval: Duration,
}

impl TelemetryPoller {
    pub fn new(
        backend: Arc<dyn TelemetryBackend>,
        dashboard: Arc<Mutex<Dashboard>>,
        sink: Arc<dyn EventSink>,
        interval: Duration,
    ) -> Self {
        Self {
            backend,
            dashboard,
            sink,
            interval,
        }
    }

    /// Runs forever. The first tick fires immediately; later ticks follow the
    /// wall clock regardless of how long earlier requests take.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks = IntervalStream::new(ticker);

        tracing::info!("Polling telemetry every {:?}", self.interval);

        let mut seq: u64 = 0;
        while ticks.next().await.is_some() {
            self.spawn_tick(seq);
            seq += 1;
        }
    }

    pub fn spawn_tick(&self, seq: u64) -> JoinHandle<ClientEvent> {
        let poller = self.clone();
        tokio::spawn(async move { poller.poll_once(seq).await })
    }

    /// Fetches one frame and applies it. Failures leave the dashboard untouched.
    pub async fn poll_once(&self, seq: u64) -> ClientEvent {
        let event = match self.backend.fetch_frame().await {
            Ok(frame) => {
                let applied = self.dashboard.lock().await.apply_frame(seq, &frame);
                if applied {
                    ClientEvent::TickApplied { seq }
                } else {
                    ClientEvent::TickDiscarded { seq }
                }
            }
            Err(e) => ClientEvent::TickFailed {
                seq,
                reason: e.to_string(),
            },
        };

        self.sink.emit(event.clone());
        event
    }
}
