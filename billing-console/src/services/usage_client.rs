//! Client for the usage service.

use crate::config::UsageServiceSettings;
use crate::models::UsageResponse;
use crate::services::metrics::record_upstream_request;
use console_core::error::AppError;
use console_core::observability::TracedClientExt;
use reqwest::Client;

/// Wraps the usage service REST API. The usage query is always scoped to
/// a license key, so callers must resolve the active license first.
pub struct UsageClient {
    client: Client,
    settings: UsageServiceSettings,
}

impl UsageClient {
    pub fn new(settings: UsageServiceSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// Fetch the current billing period's usage breakdown.
    pub async fn get_usage(&self, license_key: &str) -> Result<UsageResponse, AppError> {
        let url = format!("{}/api/v1/usage", self.settings.url);

        let response = self
            .client
            .traced_get(&url)
            .query(&[("licenseKey", license_key)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Usage fetch failed");
                record_upstream_request("usage", "error");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            record_upstream_request("usage", "error");
            return Err(AppError::BadGateway(format!(
                "usage service returned {}",
                response.status()
            )));
        }

        record_upstream_request("usage", "ok");
        response.json::<UsageResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Usage payload failed to decode");
            AppError::BadGateway("invalid usage payload".to_string())
        })
    }
}
