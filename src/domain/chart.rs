// Chart domain models
use super::history::HistoryStore;
use super::telemetry::Channel;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    MultiLine,
}

/// Where a series reads its values from in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    Channel(Channel),
    Risk,
}

#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub source: SeriesSource,
}

impl SeriesSpec {
    fn for_channel(channel: Channel) -> Self {
        Self {
            id: channel.id().to_string(),
            name: channel.label().to_string(),
            color: Some(channel.color().to_string()),
            source: SeriesSource::Channel(channel),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub show_legend: bool,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    /// All six sensor channels on one axis starting at zero.
    pub fn sensors() -> Self {
        Self {
            id: "sensors".to_string(),
            title: "Sensors".to_string(),
            kind: ChartKind::MultiLine,
            y_min: Some(0.0),
            y_max: None,
            show_legend: false,
            series: Channel::ALL.into_iter().map(SeriesSpec::for_channel).collect(),
        }
    }

    /// Risk score on a fixed [0, 1] axis.
    pub fn risk() -> Self {
        Self {
            id: "risk".to_string(),
            title: "Risk".to_string(),
            kind: ChartKind::Line,
            y_min: Some(0.0),
            y_max: Some(1.0),
            show_legend: false,
            series: vec![SeriesSpec {
                id: "risk".to_string(),
                name: "Risk".to_string(),
                color: Some("#dc2626".to_string()),
                source: SeriesSource::Risk,
            }],
        }
    }

    /// Borrow the current history contents for drawing.
    pub fn view<'a>(&'a self, history: &'a HistoryStore) -> ChartView<'a> {
        let series = self
            .series
            .iter()
            .map(|spec| SeriesView {
                spec,
                values: match spec.source {
                    SeriesSource::Channel(channel) => history.channel(channel),
                    SeriesSource::Risk => history.risk(),
                },
            })
            .collect();

        ChartView {
            spec: self,
            labels: history.labels(),
            series,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeriesView<'a> {
    pub spec: &'a SeriesSpec,
    pub values: &'a VecDeque<f64>,
}

/// A chart definition paired with live references into the history buffers.
#[derive(Debug, Clone)]
pub struct ChartView<'a> {
    pub spec: &'a ChartSpec,
    pub labels: &'a VecDeque<String>,
    pub series: Vec<SeriesView<'a>>,
}
