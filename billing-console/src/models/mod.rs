//! Payload models for billing-console.

mod checkout;
mod license;
mod usage;

pub use checkout::{CheckoutPayload, CheckoutRequest, CheckoutResponse, PortalRequest};
pub use license::{License, LicensePayload, LicenseResponse, LicenseStatus};
pub use usage::{UsageBreakdownEntry, UsageDetails, UsagePayload, UsageResponse, UsageTier};
