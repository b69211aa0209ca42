// Client events - Outcome of every poll tick and stress command
use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StressCommand {
    Start { seconds: u32, intensity: f64 },
    Stop,
}

impl fmt::Display for StressCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressCommand::Start { seconds, intensity } => {
                write!(f, "start({}s, intensity {:.2})", seconds, intensity)
            }
            StressCommand::Stop => f.write_str("stop"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    TickApplied { seq: u64 },
    /// A newer tick had already been applied when this one completed.
    TickDiscarded { seq: u64 },
    TickFailed { seq: u64, reason: String },
    StressCommandSucceeded { command: StressCommand },
    StressCommandFailed { command: StressCommand, reason: String },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ClientEvent) {
        match event {
            ClientEvent::TickApplied { seq } => tracing::debug!("Tick {} applied", seq),
            ClientEvent::TickDiscarded { seq } => {
                tracing::debug!("Tick {} discarded, a newer frame is already shown", seq)
            }
            ClientEvent::TickFailed { seq, reason } => {
                tracing::warn!("Tick {} abandoned: {}", seq, reason)
            }
            ClientEvent::StressCommandSucceeded { command } => {
                tracing::info!("Stress command {} accepted", command)
            }
            ClientEvent::StressCommandFailed { command, reason } => {
                tracing::warn!("Stress command {} failed: {}", command, reason)
            }
        }
    }
}

/// Forwards events to a channel after logging them.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ClientEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ClientEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: ClientEvent) {
        TracingSink.emit(event.clone());
        // Receiver gone means nobody is listening any more
        let _ = self.tx.send(event);
    }
}
