// Dashboard domain model
use super::history::HistoryStore;

/// Session state owned by the dashboard controller.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub history: HistoryStore,
    last_applied_seq: Option<u64>,
}

impl DashboardState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: HistoryStore::new(history_capacity),
            last_applied_seq: None,
        }
    }

    /// Claims `seq` for application. Returns false when a newer tick already landed.
    pub fn claim_tick(&mut self, seq: u64) -> bool {
        match self.last_applied_seq {
            Some(last) if seq <= last => false,
            _ => {
                self.last_applied_seq = Some(seq);
                true
            }
        }
    }

    pub fn last_applied_seq(&self) -> Option<u64> {
        self.last_applied_seq
    }
}
