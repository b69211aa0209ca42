// Rolling history of polled frames
use super::telemetry::{finite_or_zero, Channel, TelemetryFrame};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Bounded, index-aligned buffers for labels, the six sensor channels and risk.
///
/// Index `i` of every sequence refers to the same poll tick. The only
/// mutation is [`HistoryStore::append`], which evicts the oldest entries once
/// the capacity is exceeded.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    capacity: usize,
    labels: VecDeque<String>,
    channels: [VecDeque<f64>; 6],
    risk: VecDeque<f64>,
}

impl HistoryStore {
    /// A `capacity` of 0 is raised to 1; configuration loading rejects 0.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            labels: VecDeque::with_capacity(capacity + 1),
            channels: std::array::from_fn(|_| VecDeque::with_capacity(capacity + 1)),
            risk: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn append(&mut self, frame: &TelemetryFrame) {
        self.labels.push_back(frame.timestamp_label.clone());
        for (idx, channel) in Channel::ALL.iter().enumerate() {
            self.channels[idx].push_back(frame.sensors.get(*channel));
        }
        self.risk.push_back(finite_or_zero(frame.risk));
        self.trim();
    }

    fn trim(&mut self) {
        while self.labels.len() > self.capacity {
            self.labels.pop_front();
            for seq in self.channels.iter_mut() {
                seq.pop_front();
            }
            self.risk.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn labels(&self) -> &VecDeque<String> {
        &self.labels
    }

    pub fn channel(&self, channel: Channel) -> &VecDeque<f64> {
        &self.channels[channel_index(channel)]
    }

    pub fn risk(&self) -> &VecDeque<f64> {
        &self.risk
    }

    pub fn latest(&self, channel: Channel) -> Option<f64> {
        self.channel(channel).back().copied()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

// Channel discriminants follow `Channel::ALL` order.
fn channel_index(channel: Channel) -> usize {
    channel as usize
}
