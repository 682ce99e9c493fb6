// Chart series domain model and its display transform
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ChartSeries {
    pub points: Vec<SeriesPoint>,
}

/// Parallel label/value sequences ready for chart drawing.
#[derive(Debug, Clone)]
pub struct ChartDisplay {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Transform the series into display-ready labels and values.
    /// Labels are abbreviated month + day of month ("Jan 5").
    pub fn to_display(&self) -> ChartDisplay {
        let labels = self
            .points
            .iter()
            .map(|p| p.date.format("%b %-d").to_string())
            .collect();
        let values = self.points.iter().map(|p| p.value).collect();
        ChartDisplay { labels, values }
    }
}
