//! Client for the licensing service.

use crate::config::LicensingServiceSettings;
use crate::models::{CheckoutRequest, CheckoutResponse, LicenseResponse};
use crate::services::metrics::record_upstream_request;
use console_core::error::AppError;
use console_core::observability::{TracedClientExt, TracedRequest};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;

/// Wraps the licensing service REST API: license listing and checkout
/// session creation.
pub struct LicenseClient {
    client: Client,
    settings: LicensingServiceSettings,
}

impl LicenseClient {
    pub fn new(settings: LicensingServiceSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn authorized(&self, request: TracedRequest) -> TracedRequest {
        match &self.settings.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Fetch the account's license payload.
    pub async fn get_licenses(&self) -> Result<LicenseResponse, AppError> {
        let url = format!("{}/api/v1/licenses", self.settings.url);

        let response = self
            .authorized(self.client.traced_get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "License fetch failed");
                record_upstream_request("licensing", "error");
                AppError::from(e)
            })?;

        match response.status() {
            status if status.is_success() => {
                record_upstream_request("licensing", "ok");
                response.json::<LicenseResponse>().await.map_err(|e| {
                    tracing::error!(error = %e, "License payload failed to decode");
                    AppError::BadGateway("invalid license payload".to_string())
                })
            }
            StatusCode::UNAUTHORIZED => {
                record_upstream_request("licensing", "error");
                Err(AppError::Unauthorized(anyhow::anyhow!(
                    "licensing service rejected credentials"
                )))
            }
            status => {
                record_upstream_request("licensing", "error");
                Err(AppError::BadGateway(format!(
                    "licensing service returned {}",
                    status
                )))
            }
        }
    }

    /// Create a checkout session for the billing portal; the caller
    /// redirects the browser to the returned URL.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, AppError> {
        let url = format!("{}/api/v1/checkout", self.settings.url);

        let response = self
            .authorized(self.client.traced_post(&url).json(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Checkout session request failed");
                record_upstream_request("licensing", "error");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            record_upstream_request("licensing", "error");
            return Err(AppError::BadGateway(format!(
                "checkout endpoint returned {}",
                response.status()
            )));
        }

        record_upstream_request("licensing", "ok");
        response.json::<CheckoutResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Checkout payload failed to decode");
            AppError::BadGateway("invalid checkout payload".to_string())
        })
    }
}
