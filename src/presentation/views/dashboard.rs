// Dashboard view - greeting plus a line chart of the fetched series
use crate::domain::profile::UserProfile;
use crate::domain::series::{ChartDisplay, ChartSeries};
use crate::domain::view::ViewKind;
use crate::presentation::chart::LineChart;
use crate::presentation::views::View;

pub struct DashboardView {
    greeting: String,
    display: ChartDisplay,
    canvas: Option<String>,
}

impl DashboardView {
    pub fn new(profile: &UserProfile, series: &ChartSeries) -> Self {
        Self {
            greeting: profile.greeting(),
            display: series.to_display(),
            canvas: None,
        }
    }

    pub fn display(&self) -> &ChartDisplay {
        &self.display
    }
}

impl View for DashboardView {
    fn kind(&self) -> ViewKind {
        ViewKind::Dashboard
    }

    fn mount(&mut self) {
        // The chart is drawn once, on mount.
        if self.canvas.is_none() {
            self.canvas = Some(LineChart::new(&self.display).render());
        }
    }

    fn render(&self) -> String {
        format!(
            "{}\n\n{}",
            self.greeting,
            self.canvas.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session_data() -> (UserProfile, ChartSeries) {
        let profile = UserProfile {
            username: "ada".to_string(),
        };
        let points = (1..=5)
            .map(|d| crate::domain::series::SeriesPoint {
                date: Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap(),
                value: d as f64 * 2.0,
            })
            .collect();
        (profile, ChartSeries { points })
    }

    #[test]
    fn test_labels_and_values_match_series_length() {
        let (profile, series) = session_data();
        let view = DashboardView::new(&profile, &series);
        assert_eq!(view.display().labels.len(), series.len());
        assert_eq!(view.display().values.len(), series.len());
    }

    #[test]
    fn test_mount_draws_chart_into_markup() {
        let (profile, series) = session_data();
        let mut view = DashboardView::new(&profile, &series);
        assert!(!view.render().contains('*'));

        view.mount();
        let markup = view.render();
        assert!(markup.contains("Welcome, ada!"));
        assert!(markup.contains('*'));
    }
}
