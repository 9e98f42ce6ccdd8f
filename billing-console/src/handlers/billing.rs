//! Billing summary, status, portal, and workspace handlers.

use crate::billing::{active_license, build_status, build_summary, BillingStatus, BillingSummary};
use crate::models::{CheckoutRequest, PortalRequest};
use crate::services::record_summary_derivation;
use crate::startup::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use console_core::error::AppError;
use serde::Serialize;
use validator::Validate;

/// Response body for the portal endpoint.
#[derive(Debug, Serialize)]
pub struct PortalSession {
    pub redirect_url: String,
}

/// Response body for the workspace status endpoint.
#[derive(Debug, Serialize)]
pub struct WorkspaceStatus {
    pub blocked: bool,
}

/// GET /api/v1/billing/summary
///
/// Fetches the license payload, then usage (only once an active license
/// is resolved), and derives the billing page view.
pub async fn billing_summary(
    State(state): State<AppState>,
) -> Result<Json<BillingSummary>, AppError> {
    let licenses = state.license_client.get_licenses().await?;
    let payload = licenses.payload;

    let usage = match active_license(&payload.licenses) {
        Some(license) => Some(state.usage_client.get_usage(&license.key).await?.payload),
        None => {
            tracing::debug!("No active license; skipping usage fetch");
            None
        }
    };

    let summary = build_summary(&payload, usage.as_ref(), Utc::now());

    record_summary_derivation(if summary.on_trial {
        "trial"
    } else if usage.is_some() {
        "paid"
    } else {
        "no_license"
    });

    Ok(Json(summary))
}

/// GET /api/v1/billing/status
///
/// Header-level state: derived from the license payload alone, no usage
/// fetch.
pub async fn billing_status(
    State(state): State<AppState>,
) -> Result<Json<BillingStatus>, AppError> {
    let licenses = state.license_client.get_licenses().await?;
    Ok(Json(build_status(&licenses.payload, Utc::now())))
}

/// GET /api/v1/workspace/status
pub async fn workspace_status(
    State(state): State<AppState>,
) -> Result<Json<WorkspaceStatus>, AppError> {
    let licenses = state.license_client.get_licenses().await?;
    Ok(Json(WorkspaceStatus {
        blocked: licenses.payload.work_space_block,
    }))
}

/// POST /api/v1/billing/portal
///
/// Opens a checkout session for the active license and returns the URL
/// the dashboard should redirect the browser to.
pub async fn create_portal_session(
    State(state): State<AppState>,
    Json(request): Json<PortalRequest>,
) -> Result<Json<PortalSession>, AppError> {
    request.validate()?;

    let licenses = state.license_client.get_licenses().await?;
    let license = active_license(&licenses.payload.licenses).ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!("no active license on this account"))
    })?;

    let checkout = CheckoutRequest {
        license_key: license.key.clone(),
        success_url: request.success_url,
        cancel_url: request.cancel_url,
    };

    let session = state
        .license_client
        .create_checkout_session(&checkout)
        .await?;

    Ok(Json(PortalSession {
        redirect_url: session.payload.redirect_url,
    }))
}
