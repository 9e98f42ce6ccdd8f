//! Usage aggregation and billing narrative derivation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{LicensePayload, UsageBreakdownEntry, UsagePayload};

use super::license::license_active;
use super::period::{format_date, remaining_days};

/// Currency prefix applied to tier costs and the bill total.
pub const BILL_CURRENCY: &str = "$";

/// The trial-expiry banner shows when fewer than this many days remain.
pub const TRIAL_BANNER_THRESHOLD_DAYS: i64 = 7;

/// One `(category, tier)` pair flattened into a display row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRow {
    pub key: String,
    pub name: String,
    pub unit: String,
    pub data_ingested: Decimal,
    pub price_per_unit: Decimal,
    pub cost: String,
}

/// Flatten the nested usage breakdown into display rows, preserving
/// category order and tier order within each category.
///
/// Row keys are synthesized from the category and tier indices, so they
/// are unique and stable across recomputation from the same payload.
pub fn flatten_breakdown(breakdown: &[UsageBreakdownEntry]) -> Vec<UsageRow> {
    let mut rows = Vec::new();

    for (index, entry) in breakdown.iter().enumerate() {
        for (tier_index, tier) in entry.tiers.iter().enumerate() {
            rows.push(UsageRow {
                key: format!("{}{}", index, tier_index),
                name: entry.category.clone(),
                unit: entry.unit.clone(),
                data_ingested: tier.quantity,
                price_per_unit: tier.unit_price,
                cost: format!("{} {}", BILL_CURRENCY, tier.tier_cost),
            });
        }
    }

    rows
}

/// Whether the trial-expiry banner should show: on trial, with strictly
/// fewer than seven days left until the trial end.
pub fn show_trial_banner(license: &LicensePayload, now: DateTime<Utc>) -> bool {
    license.on_trial && remaining_days(now, license.trial_end) < TRIAL_BANNER_THRESHOLD_DAYS
}

/// Header-level billing state, derivable from the license payload alone.
#[derive(Debug, Clone, Serialize)]
pub struct BillingStatus {
    pub license_active: bool,
    pub on_trial: bool,
    pub trial_end_date: String,
    pub show_trial_banner: bool,
    pub workspace_blocked: bool,
}

/// Derive the header-level state without touching usage data, so the
/// header can render before (or without) a usage fetch.
pub fn build_status(license: &LicensePayload, now: DateTime<Utc>) -> BillingStatus {
    BillingStatus {
        license_active: license_active(license),
        on_trial: license.on_trial,
        trial_end_date: format_date(license.trial_end),
        show_trial_banner: show_trial_banner(license, now),
        workspace_blocked: license.work_space_block,
    }
}

/// The billing page view: narrative, headline figures, and usage table.
#[derive(Debug, Clone, Serialize)]
pub struct BillingSummary {
    pub header_text: String,
    pub bill_amount: Decimal,
    pub days_remaining: i64,
    pub on_trial: bool,
    pub rows: Vec<UsageRow>,
    pub total: Option<Decimal>,
    pub show_trial_banner: bool,
    pub workspace_blocked: bool,
}

/// Derive the billing summary from the license payload and, when the
/// usage fetch has completed, the usage payload.
///
/// While on trial the billed amount and remaining days are pinned to zero
/// and the narrative speaks about the trial end; the usage table is still
/// populated when usage data is present. The upstream total is passed
/// through untouched, absent or not.
pub fn build_summary(
    license: &LicensePayload,
    usage: Option<&UsagePayload>,
    now: DateTime<Utc>,
) -> BillingSummary {
    let rows = usage
        .map(|usage| flatten_breakdown(&usage.details.breakdown))
        .unwrap_or_default();
    let total = usage.and_then(|usage| usage.details.total);

    let (header_text, bill_amount, days_remaining) = if license.on_trial {
        (
            format!(
                "You are in free trial period. Your free trial will end on {}",
                format_date(license.trial_end)
            ),
            Decimal::ZERO,
            0,
        )
    } else if let Some(usage) = usage {
        (
            format!(
                "Your current billing period is from {} to {}",
                format_date(usage.billing_period_start),
                format_date(usage.billing_period_end)
            ),
            total.unwrap_or(Decimal::ZERO),
            remaining_days(now, usage.billing_period_end).max(0),
        )
    } else {
        // No active license resolved: nothing billable to narrate.
        (String::new(), Decimal::ZERO, 0)
    };

    BillingSummary {
        header_text,
        bill_amount,
        days_remaining,
        on_trial: license.on_trial,
        rows,
        total,
        show_trial_banner: show_trial_banner(license, now),
        workspace_blocked: license.work_space_block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UsageDetails, UsageTier};

    // 1 Jun 2024 00:00:00 UTC
    const NOW_EPOCH: i64 = 1_717_200_000;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(NOW_EPOCH, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn tier(quantity: &str, unit_price: &str, tier_cost: &str) -> UsageTier {
        UsageTier {
            quantity: dec(quantity),
            unit_price: dec(unit_price),
            tier_cost: dec(tier_cost),
        }
    }

    fn entry(category: &str, unit: &str, tiers: Vec<UsageTier>) -> UsageBreakdownEntry {
        UsageBreakdownEntry {
            category: category.to_string(),
            unit: unit.to_string(),
            tiers,
        }
    }

    fn trial_license(trial_end: i64) -> LicensePayload {
        LicensePayload {
            on_trial: true,
            trial_end,
            ..LicensePayload::default()
        }
    }

    #[test]
    fn flattening_preserves_category_then_tier_order() {
        let breakdown = vec![
            entry("Logs", "GB", vec![tier("10", "0.5", "5.0")]),
            entry("Traces", "GB", vec![tier("2", "1.0", "2.0")]),
        ];

        let rows = flatten_breakdown(&breakdown);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "00");
        assert_eq!(rows[0].name, "Logs");
        assert_eq!(rows[0].unit, "GB");
        assert_eq!(rows[0].data_ingested, dec("10"));
        assert_eq!(rows[0].price_per_unit, dec("0.5"));
        assert_eq!(rows[0].cost, "$ 5.0");
        assert_eq!(rows[1].key, "10");
        assert_eq!(rows[1].name, "Traces");
        assert_eq!(rows[1].cost, "$ 2.0");
    }

    #[test]
    fn multi_tier_categories_get_distinct_keys() {
        let breakdown = vec![entry(
            "Logs",
            "GB",
            vec![tier("100", "0.4", "40"), tier("50", "0.3", "15")],
        )];

        let rows = flatten_breakdown(&breakdown);

        assert_eq!(rows[0].key, "00");
        assert_eq!(rows[1].key, "01");
    }

    #[test]
    fn flattening_is_idempotent() {
        let breakdown = vec![
            entry("Logs", "GB", vec![tier("10", "0.5", "5.0")]),
            entry("Metrics", "mn samples", vec![tier("3", "0.1", "0.3")]),
        ];

        assert_eq!(flatten_breakdown(&breakdown), flatten_breakdown(&breakdown));
    }

    #[test]
    fn empty_breakdown_yields_no_rows_and_passes_total_through() {
        let usage = UsagePayload {
            billing_period_start: NOW_EPOCH - 30 * 86_400,
            billing_period_end: NOW_EPOCH + 86_400,
            details: UsageDetails {
                total: Some(Decimal::ZERO),
                breakdown: vec![],
            },
        };

        let summary = build_summary(&LicensePayload::default(), Some(&usage), now());

        assert!(summary.rows.is_empty());
        assert_eq!(summary.total, Some(Decimal::ZERO));
        assert_eq!(summary.bill_amount, Decimal::ZERO);
    }

    #[test]
    fn missing_total_stays_missing() {
        let usage = UsagePayload::default();
        let summary = build_summary(&LicensePayload::default(), Some(&usage), now());

        assert_eq!(summary.total, None);
        assert_eq!(summary.bill_amount, Decimal::ZERO);
    }

    #[test]
    fn billing_period_narrative_uses_period_dates_and_total() {
        let usage = UsagePayload {
            // 1 May 2024 to 11 Jun 2024
            billing_period_start: 1_714_521_600,
            billing_period_end: NOW_EPOCH + 10 * 86_400,
            details: UsageDetails {
                total: Some(dec("7.0")),
                breakdown: vec![
                    entry("Logs", "GB", vec![tier("10", "0.5", "5.0")]),
                    entry("Traces", "GB", vec![tier("2", "1.0", "2.0")]),
                ],
            },
        };

        let summary = build_summary(&LicensePayload::default(), Some(&usage), now());

        assert_eq!(
            summary.header_text,
            "Your current billing period is from 1 May 2024 to 11 Jun 2024"
        );
        assert_eq!(summary.bill_amount, dec("7.0"));
        assert_eq!(summary.days_remaining, 10);
        assert!(!summary.on_trial);
        assert!(!summary.show_trial_banner);
    }

    #[test]
    fn expired_period_clamps_days_remaining_to_zero() {
        let usage = UsagePayload {
            billing_period_start: NOW_EPOCH - 60 * 86_400,
            billing_period_end: NOW_EPOCH - 30 * 86_400,
            ..UsagePayload::default()
        };

        let summary = build_summary(&LicensePayload::default(), Some(&usage), now());

        assert_eq!(summary.days_remaining, 0);
    }

    #[test]
    fn trial_pins_amount_and_days_to_zero_but_keeps_the_table() {
        let usage = UsagePayload {
            billing_period_start: NOW_EPOCH - 86_400,
            billing_period_end: NOW_EPOCH + 20 * 86_400,
            details: UsageDetails {
                total: Some(dec("9.5")),
                breakdown: vec![entry("Logs", "GB", vec![tier("19", "0.5", "9.5")])],
            },
        };
        // Trial ends 6 Jun 2024.
        let license = trial_license(NOW_EPOCH + 5 * 86_400);

        let summary = build_summary(&license, Some(&usage), now());

        assert_eq!(
            summary.header_text,
            "You are in free trial period. Your free trial will end on 6 Jun 2024"
        );
        assert_eq!(summary.bill_amount, Decimal::ZERO);
        assert_eq!(summary.days_remaining, 0);
        assert!(summary.on_trial);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.total, Some(dec("9.5")));
    }

    #[test]
    fn no_usage_payload_degrades_to_an_empty_view() {
        let summary = build_summary(&LicensePayload::default(), None, now());

        assert_eq!(summary.header_text, "");
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total, None);
        assert_eq!(summary.days_remaining, 0);
    }

    #[test]
    fn banner_shows_only_under_seven_trial_days() {
        let five_days = trial_license(NOW_EPOCH + 5 * 86_400);
        let ten_days = trial_license(NOW_EPOCH + 10 * 86_400);
        let mut not_on_trial = trial_license(NOW_EPOCH + 5 * 86_400);
        not_on_trial.on_trial = false;

        assert!(show_trial_banner(&five_days, now()));
        assert!(!show_trial_banner(&ten_days, now()));
        assert!(!show_trial_banner(&not_on_trial, now()));
    }

    #[test]
    fn banner_shows_for_an_already_expired_trial() {
        let expired = trial_license(NOW_EPOCH - 86_400);
        assert!(show_trial_banner(&expired, now()));
    }

    #[test]
    fn status_carries_workspace_block_and_license_validity() {
        let mut license = trial_license(NOW_EPOCH + 3 * 86_400);
        license.work_space_block = true;

        let status = build_status(&license, now());

        assert!(status.workspace_blocked);
        assert!(!status.license_active);
        assert!(status.on_trial);
        assert!(status.show_trial_banner);
        assert_eq!(status.trial_end_date, "4 Jun 2024");
    }
}
