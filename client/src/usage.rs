//! Usage statistics client

use serde::{Deserialize, Serialize};

use crate::{AnalyzerClient, ClientError};

/// One ranked entry from the usage-statistics feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub name: String,
    /// Usage share in percent
    pub usage: f64,
    pub rank: u32,
}

impl AnalyzerClient {
    /// Fetch ranked usage statistics for the current format.
    pub async fn usage_stats(&self) -> Result<Vec<UsageEntry>, ClientError> {
        let response = self
            .http
            .get(format!("{}/pikalytics-usage", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Usage statistics fetch failed");
            return Err(ClientError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
