// Dashboard controller - Folds frames into history and renders them
use crate::application::presenters::{ChartPresenter, KpiPresenter, StatePresenter};
use crate::application::renderer::Renderer;
use crate::domain::advisory::Advisory;
use crate::domain::dashboard::DashboardState;
use crate::domain::history::HistoryStore;
use crate::domain::telemetry::TelemetryFrame;

pub struct Dashboard {
    state: DashboardState,
    renderer: Box<dyn Renderer>,
    kpis: KpiPresenter,
    charts: ChartPresenter,
    status: StatePresenter,
}

impl Dashboard {
    pub fn new(history_capacity: usize, renderer: Box<dyn Renderer>) -> Self {
        Self {
            state: DashboardState::new(history_capacity),
            renderer,
            kpis: KpiPresenter,
            charts: ChartPresenter::new(),
            status: StatePresenter,
        }
    }

    /// Applies the frame produced by tick `seq`.
    ///
    /// Returns `false` without touching history when a newer tick has already
    /// been applied.
    pub fn apply_frame(&mut self, seq: u64, frame: &TelemetryFrame) -> bool {
        if !self.state.claim_tick(seq) {
            return false;
        }

        self.state.history.append(frame);

        let renderer = self.renderer.as_mut();
        self.kpis.render(&self.state.history, renderer);
        self.charts.redraw(&self.state.history, renderer);
        self.status.render(frame, renderer);

        let advisory = Advisory::evaluate(&frame.sensors, frame.risk, frame.distance_m);
        renderer.set_recommendation(advisory.message());
        true
    }

    pub fn history(&self) -> &HistoryStore {
        &self.state.history
    }

    pub fn charts(&self) -> &ChartPresenter {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::renderer::testing::{RecommendationOnly, RecordingRenderer};
    use crate::domain::telemetry::{SensorSample, StressStatus, SystemState};

    fn frame(label: &str, risk: f64, distance_m: Option<f64>) -> TelemetryFrame {
        TelemetryFrame {
            timestamp_label: label.to_string(),
            sensors: SensorSample {
                temperature_c: 80.0,
                pressure_bar: 2.0,
                load_pct: 70.0,
                throughput: 150.0,
                vibration: 4.0,
                humidity: 45.0,
            },
            risk,
            distance_m,
            system_state: SystemState::Running,
            stress: StressStatus { active: true, seconds_left: 12 },
        }
    }

    #[test]
    fn test_apply_frame_renders_every_slot() {
        let renderer = RecordingRenderer::default();
        let mut dashboard = Dashboard::new(30, Box::new(renderer.clone()));

        assert!(dashboard.apply_frame(0, &frame("10:00:00", 0.55, Some(1.2))));

        let log = renderer.snapshot();
        assert_eq!(log.kpis.len(), 6);
        assert_eq!(log.chart_redraws, 1);
        assert_eq!(log.state.map(|s| s.0), Some("RUNNING".to_string()));
        assert_eq!(log.banner, Some((true, Some("12".to_string()))));
        assert_eq!(log.recommendation.as_deref(), Some(Advisory::ReduceLoad.message()));
        assert_eq!(dashboard.history().len(), 1);
    }

    #[test]
    fn test_stale_tick_is_dropped() {
        let renderer = RecordingRenderer::default();
        let mut dashboard = Dashboard::new(30, Box::new(renderer.clone()));

        assert!(dashboard.apply_frame(1, &frame("10:00:01", 0.2, Some(1.0))));
        assert!(!dashboard.apply_frame(0, &frame("10:00:00", 0.9, Some(1.0))));

        let labels: Vec<_> = dashboard.history().labels().iter().cloned().collect();
        assert_eq!(labels, vec!["10:00:01"]);
        assert_eq!(renderer.snapshot().chart_redraws, 1);
        assert_eq!(dashboard.charts().risk().redraws(), 1);
    }

    #[test]
    fn test_partial_surface_still_gets_recommendation() {
        let renderer = RecommendationOnly::default();
        let mut dashboard = Dashboard::new(30, Box::new(renderer.clone()));

        dashboard.apply_frame(0, &frame("10:00:00", 0.1, None));

        assert_eq!(
            renderer.text.lock().unwrap().as_deref(),
            Some(Advisory::DistanceUnavailable.message())
        );
    }
}
