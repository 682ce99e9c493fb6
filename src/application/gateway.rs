// Gateway trait for the two remote JSON resources
use crate::domain::profile::UserProfile;
use crate::domain::series::ChartSeries;
use async_trait::async_trait;
use thiserror::Error;

/// The one modeled failure: a data fetch that did not produce a usable
/// response. The URL is carried for the developer log; users only ever see
/// the static error view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Fetch the user profile resource.
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError>;

    /// Fetch the chart series resource.
    async fn fetch_chart_series(&self) -> Result<ChartSeries, FetchError>;
}
