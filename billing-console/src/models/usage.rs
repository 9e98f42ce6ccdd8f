//! Usage breakdown payload model, as returned by the usage service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced consumption band within a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTier {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tier_cost: Decimal,
}

/// Metered usage for one data category, broken into pricing tiers.
/// Tier order is pricing-tier order and must be preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageBreakdownEntry {
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub tiers: Vec<UsageTier>,
}

/// Billed detail for the period. The total is the upstream figure and is
/// never recomputed here; a missing breakdown decodes to an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageDetails {
    pub total: Option<Decimal>,
    pub breakdown: Vec<UsageBreakdownEntry>,
}

/// Usage for one billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsagePayload {
    pub billing_period_start: i64,
    pub billing_period_end: i64,
    pub details: UsageDetails,
}

/// Envelope for the usage endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub payload: UsagePayload,
}
