//! License payload model, as returned by the licensing service.

use serde::{Deserialize, Serialize};

/// License validity state reported by the licensing service.
///
/// Unrecognized values map to `Unknown` rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseStatus {
    Valid,
    Expired,
    Pending,
    #[serde(other)]
    Unknown,
}

impl Default for LicenseStatus {
    fn default() -> Self {
        LicenseStatus::Unknown
    }
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Valid => "VALID",
            LicenseStatus::Expired => "EXPIRED",
            LicenseStatus::Pending => "PENDING",
            LicenseStatus::Unknown => "UNKNOWN",
        }
    }
}

/// A single license record for the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub key: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub status: LicenseStatus,
}

/// Account-level licensing state: trial window, workspace block, and the
/// set of license records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicensePayload {
    pub on_trial: bool,
    pub trial_start: i64,
    pub trial_end: i64,
    pub work_space_block: bool,
    pub licenses: Vec<License>,
}

/// Envelope for the license listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseResponse {
    #[serde(default)]
    pub payload: LicensePayload,
}
