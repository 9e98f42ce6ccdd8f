//! Upstream clients and metrics for billing-console.

pub mod license_client;
pub mod metrics;
pub mod usage_client;

pub use license_client::LicenseClient;
pub use metrics::{
    get_metrics, init_metrics, record_summary_derivation, record_upstream_request,
};
pub use usage_client::UsageClient;
