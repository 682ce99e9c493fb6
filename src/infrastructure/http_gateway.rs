// HTTP implementation of the data gateway
use crate::application::gateway::{DataGateway, FetchError};
use crate::domain::profile::UserProfile;
use crate::domain::series::ChartSeries;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    profile_url: String,
    chart_url: String,
}

impl HttpGateway {
    pub fn new(profile_url: String, chart_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            profile_url,
            chart_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl DataGateway for HttpGateway {
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        self.get_json(&self.profile_url).await
    }

    async fn fetch_chart_series(&self) -> Result<ChartSeries, FetchError> {
        self.get_json(&self.chart_url).await
    }
}
