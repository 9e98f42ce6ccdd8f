//! Billing-period and trial derivation logic.
//!
//! Pure functions over the licensing and usage payloads. The HTTP layer
//! fetches; these derive. Every function that depends on the clock takes
//! `now` as an argument so tests can pin it.

mod license;
mod period;
mod summary;

pub use license::{active_license, license_active};
pub use period::{format_date, remaining_days, MILLIS_PER_DAY};
pub use summary::{
    build_status, build_summary, flatten_breakdown, show_trial_banner, BillingStatus,
    BillingSummary, UsageRow, BILL_CURRENCY, TRIAL_BANNER_THRESHOLD_DAYS,
};
