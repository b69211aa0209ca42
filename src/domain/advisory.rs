// Operational recommendation derived from a single frame
use super::telemetry::SensorSample;
use std::fmt;

pub const RISK_WARNING: f64 = 0.5;
pub const RISK_CRITICAL: f64 = 0.7;
pub const TEMPERATURE_LIMIT_C: f64 = 75.0;
pub const PRESSURE_LIMIT_BAR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    DistanceUnavailable,
    Critical,
    ReduceLoad,
    MaintainDistance,
    Nominal,
}

impl Advisory {
    /// First matching rule wins; distance availability outranks risk.
    pub fn evaluate(sensors: &SensorSample, risk: f64, distance_m: Option<f64>) -> Self {
        if distance_m.is_none() {
            return Advisory::DistanceUnavailable;
        }
        if risk >= RISK_CRITICAL {
            return Advisory::Critical;
        }
        if risk >= RISK_WARNING {
            if sensors.temperature_c > TEMPERATURE_LIMIT_C
                || sensors.pressure_bar > PRESSURE_LIMIT_BAR
            {
                return Advisory::ReduceLoad;
            }
            return Advisory::MaintainDistance;
        }
        Advisory::Nominal
    }

    pub fn message(self) -> &'static str {
        match self {
            Advisory::DistanceUnavailable => {
                "Show the distance marker to enable precise distance monitoring."
            }
            Advisory::Critical => "CRITICAL: Auto-STOP engaged. Increase distance and lower load.",
            Advisory::ReduceLoad => "WARNING: Reduce speed/load to lower temperature/pressure.",
            Advisory::MaintainDistance => {
                "WARNING: Maintain a safe distance and monitor vibration."
            }
            Advisory::Nominal => "SAFE: Conditions nominal.",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensors(temperature_c: f64, pressure_bar: f64) -> SensorSample {
        SensorSample {
            temperature_c,
            pressure_bar,
            load_pct: 50.0,
            throughput: 100.0,
            vibration: 2.0,
            humidity: 40.0,
        }
    }

    #[test]
    fn test_missing_distance_wins() {
        for risk in [0.0, 0.55, 0.71, 1.0] {
            assert_eq!(
                Advisory::evaluate(&sensors(99.0, 9.0), risk, None),
                Advisory::DistanceUnavailable
            );
        }
    }

    #[test]
    fn test_warning_with_hot_or_pressurised_plant() {
        assert_eq!(Advisory::evaluate(&sensors(80.0, 2.0), 0.55, Some(1.2)), Advisory::ReduceLoad);
        assert_eq!(Advisory::evaluate(&sensors(60.0, 4.5), 0.55, Some(1.2)), Advisory::ReduceLoad);
    }

    #[test]
    fn test_warning_otherwise() {
        assert_eq!(
            Advisory::evaluate(&sensors(60.0, 2.0), 0.55, Some(1.2)),
            Advisory::MaintainDistance
        );
    }

    #[test]
    fn test_critical_and_safe() {
        assert_eq!(Advisory::evaluate(&sensors(60.0, 2.0), 0.71, Some(1.0)), Advisory::Critical);
        assert_eq!(Advisory::evaluate(&sensors(60.0, 2.0), 0.49, Some(1.0)), Advisory::Nominal);
    }

    #[test]
    fn test_threshold_boundaries() {
        let s = sensors(75.0, 4.0);
        assert_eq!(Advisory::evaluate(&s, 0.7, Some(1.0)), Advisory::Critical);
        assert_eq!(Advisory::evaluate(&s, 0.5, Some(1.0)), Advisory::MaintainDistance);
        assert_eq!(Advisory::evaluate(&sensors(75.1, 4.0), 0.5, Some(1.0)), Advisory::ReduceLoad);
        assert_eq!(Advisory::evaluate(&sensors(75.0, 4.01), 0.5, Some(1.0)), Advisory::ReduceLoad);
    }
}
