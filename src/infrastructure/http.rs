use gloo::net::http::Request;

use crate::domain::analysis::AnalysisSnapshot;
use crate::domain::errors::{DashboardError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};

use super::dto::AnalysisResponse;

/// Fixed analysis endpoint of the backend.
pub const ANALYSIS_ENDPOINT: &str = "/api/v1/analise-btc";
const FORCE_UPDATE_QUERY: &str = "force_update=true";

/// HTTP client for the market-analysis API.
#[derive(Clone)]
pub struct AnalysisApiClient {
    endpoint: String,
}

impl Default for AnalysisApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisApiClient {
    pub fn new() -> Self {
        Self {
            endpoint: ANALYSIS_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a non-default endpoint (staging, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// URL of one fetch; `force_refresh` adds the cache-bypass parameter.
    pub fn request_url(&self, force_refresh: bool) -> String {
        if force_refresh {
            format!("{}?{}", self.endpoint, FORCE_UPDATE_QUERY)
        } else {
            self.endpoint.clone()
        }
    }

    /// Fetch and decode one snapshot. Single attempt - retries only happen
    /// through the user-triggered refresh action.
    pub async fn fetch_analysis(&self, force_refresh: bool) -> NetworkResult<AnalysisSnapshot> {
        let url = self.request_url(force_refresh);

        get_logger().info(
            LogComponent::Infrastructure("AnalysisApiClient"),
            &format!("📡 GET {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("request failed: {}", e)))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!(
                "HTTP {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| DashboardError::Decode(format!("invalid payload: {}", e)))?;

        let snapshot = body.into_snapshot()?;

        get_logger().info(
            LogComponent::Infrastructure("AnalysisApiClient"),
            &format!("✅ Snapshot received - score {}", snapshot.score.value()),
        );

        Ok(snapshot)
    }
}
