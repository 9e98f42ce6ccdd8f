//! Checkout session payloads for the billing portal flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound request from the dashboard to open the billing portal.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortalRequest {
    #[validate(url)]
    pub success_url: String,
    #[validate(url)]
    pub cancel_url: String,
}

/// Outbound request to the licensing service checkout endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    #[serde(rename = "licenseKey")]
    pub license_key: String,
    #[serde(rename = "successURL")]
    pub success_url: String,
    #[serde(rename = "cancelURL")]
    pub cancel_url: String,
}

/// Envelope returned by the checkout endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    pub payload: CheckoutPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutPayload {
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}
