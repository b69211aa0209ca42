// Presenters - Turn history and frames into renderer calls
use crate::application::renderer::{Renderer, StateStyle};
use crate::domain::chart::ChartSpec;
use crate::domain::history::HistoryStore;
use crate::domain::telemetry::{Channel, SystemState, TelemetryFrame};
use std::time::Duration;

/// Shown in place of a value that is missing or not a number.
pub const FALLBACK_TOKEN: &str = "--";

/// Length of the scale pulse played on every status update.
pub const PULSE_DURATION: Duration = Duration::from_millis(120);

pub fn format_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.*}", precision, v),
        _ => FALLBACK_TOKEN.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KpiPresenter;

impl KpiPresenter {
    pub fn render(&self, history: &HistoryStore, renderer: &mut dyn Renderer) {
        for channel in Channel::ALL {
            let text = format_value(history.latest(channel), channel.precision());
            renderer.set_kpi(channel, &text);
        }
    }
}

/// A chart definition kept alive for the whole session and redrawn in place.
#[derive(Debug, Clone)]
pub struct ChartBinding {
    spec: ChartSpec,
    redraws: u64,
}

impl ChartBinding {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec, redraws: 0 }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

#[derive(Debug, Clone)]
pub struct ChartPresenter {
    sensors: ChartBinding,
    risk: ChartBinding,
}

impl ChartPresenter {
    pub fn new() -> Self {
        Self {
            sensors: ChartBinding::new(ChartSpec::sensors()),
            risk: ChartBinding::new(ChartSpec::risk()),
        }
    }

    pub fn redraw(&mut self, history: &HistoryStore, renderer: &mut dyn Renderer) {
        let sensors = self.sensors.spec.view(history);
        let risk = self.risk.spec.view(history);
        renderer.update_charts(&sensors, &risk);
        self.sensors.redraws += 1;
        self.risk.redraws += 1;
    }

    pub fn sensors(&self) -> &ChartBinding {
        &self.sensors
    }

    pub fn risk(&self) -> &ChartBinding {
        &self.risk
    }
}

impl Default for ChartPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatePresenter;

impl StatePresenter {
    pub fn render(&self, frame: &TelemetryFrame, renderer: &mut dyn Renderer) {
        let style = StateStyle {
            running: frame.system_state == SystemState::Running,
            stopped: frame.system_state == SystemState::Stopped,
        };
        renderer.set_system_state(frame.system_state.as_str(), style, PULSE_DURATION);

        if frame.stress.active {
            let countdown = frame.stress.seconds_left.to_string();
            renderer.set_stress_banner(true, Some(&countdown));
        } else {
            renderer.set_stress_banner(false, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::renderer::testing::RecordingRenderer;
    use crate::application::renderer::NullRenderer;
    use crate::domain::telemetry::{SensorSample, StressStatus};

    fn frame(state: SystemState, stress: StressStatus) -> TelemetryFrame {
        TelemetryFrame {
            timestamp_label: "12:00:00".to_string(),
            sensors: SensorSample {
                temperature_c: 61.27,
                pressure_bar: 2.346,
                load_pct: 55.5,
                throughput: 120.4,
                vibration: 3.14159,
                humidity: 41.6,
            },
            risk: 0.42,
            distance_m: Some(1.5),
            system_state: state,
            stress,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(61.27), 1), "61.3");
        assert_eq!(format_value(Some(2.0), 2), "2.00");
        assert_eq!(format_value(Some(55.5), 0), "56");
        assert_eq!(format_value(Some(0.0), 0), "0");
        assert_eq!(format_value(None, 1), FALLBACK_TOKEN);
        assert_eq!(format_value(Some(f64::NAN), 2), FALLBACK_TOKEN);
    }

    #[test]
    fn test_kpis_use_channel_precision() {
        let mut history = HistoryStore::new(30);
        history.append(&frame(SystemState::Running, StressStatus::default()));
        let mut renderer = RecordingRenderer::default();

        KpiPresenter.render(&history, &mut renderer);

        let kpis = renderer.snapshot().kpis;
        assert_eq!(
            kpis,
            vec![
                (Channel::Temperature, "61.3".to_string()),
                (Channel::Pressure, "2.35".to_string()),
                (Channel::Load, "56".to_string()),
                (Channel::Throughput, "120".to_string()),
                (Channel::Vibration, "3.14".to_string()),
                (Channel::Humidity, "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_kpis_fall_back_on_empty_history() {
        let history = HistoryStore::new(30);
        let mut renderer = RecordingRenderer::default();
        KpiPresenter.render(&history, &mut renderer);
        assert!(renderer.snapshot().kpis.iter().all(|(_, t)| t == FALLBACK_TOKEN));
    }

    #[test]
    fn test_chart_redraw_reflects_appends_without_rebinding() {
        let mut history = HistoryStore::new(30);
        let mut charts = ChartPresenter::new();
        let mut renderer = RecordingRenderer::default();

        history.append(&frame(SystemState::Running, StressStatus::default()));
        charts.redraw(&history, &mut renderer);
        assert_eq!(renderer.snapshot().risk_values, vec![0.42]);

        let mut next = frame(SystemState::Running, StressStatus::default());
        next.timestamp_label = "12:00:01".to_string();
        next.risk = 0.6;
        history.append(&next);
        charts.redraw(&history, &mut renderer);

        let log = renderer.snapshot();
        assert_eq!(log.chart_redraws, 2);
        assert_eq!(log.sensor_labels, vec!["12:00:00", "12:00:01"]);
        assert_eq!(log.risk_values, vec![0.42, 0.6]);
        assert_eq!(charts.sensors().redraws(), 2);
        assert_eq!(charts.risk().spec().y_max, Some(1.0));
    }

    #[test]
    fn test_state_styles_are_exclusive() {
        let cases = [
            (SystemState::Running, true, false),
            (SystemState::Stopped, false, true),
            (SystemState::Other("MAINTENANCE".to_string()), false, false),
        ];
        for (state, running, stopped) in cases {
            let mut renderer = RecordingRenderer::default();
            StatePresenter.render(&frame(state.clone(), StressStatus::default()), &mut renderer);
            let (text, style, pulse) = renderer.snapshot().state.unwrap();
            assert_eq!(text, state.as_str());
            assert_eq!(style, StateStyle { running, stopped });
            assert_eq!(pulse, PULSE_DURATION);
        }
    }

    #[test]
    fn test_stress_banner_countdown() {
        let mut renderer = RecordingRenderer::default();
        let active = StressStatus { active: true, seconds_left: 12 };
        StatePresenter.render(&frame(SystemState::Running, active), &mut renderer);
        assert_eq!(renderer.snapshot().banner, Some((true, Some("12".to_string()))));

        StatePresenter.render(&frame(SystemState::Running, StressStatus::default()), &mut renderer);
        assert_eq!(renderer.snapshot().banner, Some((false, None)));
    }

    #[test]
    fn test_presenters_tolerate_missing_ui() {
        let mut history = HistoryStore::new(30);
        let f = frame(SystemState::Stopped, StressStatus { active: true, seconds_left: 3 });
        history.append(&f);
        let mut renderer = NullRenderer;
        KpiPresenter.render(&history, &mut renderer);
        ChartPresenter::new().redraw(&history, &mut renderer);
        StatePresenter.render(&f, &mut renderer);
    }
}
