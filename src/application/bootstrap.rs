// Startup fetch sequence - profile first, chart series only after it succeeds
use crate::application::gateway::{DataGateway, FetchError};
use crate::domain::profile::UserProfile;
use crate::domain::series::ChartSeries;
use std::sync::Arc;

/// Everything the routed views need. Only constructed when both fetches
/// succeeded, so a dashboard can never see a profile without a series or
/// vice versa.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: UserProfile,
    pub series: ChartSeries,
}

/// Where the application is relative to the startup fetch sequence.
/// Error and Routed are terminal; the sequence is never retried.
#[derive(Debug)]
pub enum AppPhase {
    Loading,
    Error,
    Routed(Session),
}

#[derive(Clone)]
pub struct BootstrapService {
    gateway: Arc<dyn DataGateway>,
}

impl BootstrapService {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Run the two fetches in strict sequence. A profile failure
    /// short-circuits: the chart request is never constructed.
    pub async fn run(&self) -> Result<Session, FetchError> {
        tracing::debug!("fetching user profile");
        let profile = self.gateway.fetch_profile().await?;

        tracing::debug!(username = %profile.username, "profile loaded, fetching chart series");
        let series = self.gateway.fetch_chart_series().await?;

        tracing::debug!(points = series.len(), "chart series loaded");
        Ok(Session { profile, series })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingProfileGateway {
        chart_calls: AtomicUsize,
    }

    #[async_trait]
    impl DataGateway for FailingProfileGateway {
        async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
            Err(FetchError::Status {
                url: "/api/userdata".to_string(),
                status: 503,
            })
        }

        async fn fetch_chart_series(&self) -> Result<ChartSeries, FetchError> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChartSeries { points: Vec::new() })
        }
    }

    #[tokio::test]
    async fn test_profile_failure_short_circuits_chart_fetch() {
        let gateway = Arc::new(FailingProfileGateway {
            chart_calls: AtomicUsize::new(0),
        });
        let service = BootstrapService::new(gateway.clone());

        let result = service.run().await;
        assert!(result.is_err());
        assert_eq!(gateway.chart_calls.load(Ordering::SeqCst), 0);
    }
}
