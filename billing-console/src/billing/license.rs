//! Active-license selection.

use crate::models::{License, LicensePayload, LicenseStatus};

/// Select the account's active license: the first record flagged current.
///
/// An empty or fully-inactive set is a valid state, not an error; callers
/// suppress the usage query when this returns `None`.
pub fn active_license(licenses: &[License]) -> Option<&License> {
    licenses.iter().find(|license| license.is_current)
}

/// Whether the account's current license is valid.
pub fn license_active(payload: &LicensePayload) -> bool {
    active_license(&payload.licenses)
        .map(|license| license.status == LicenseStatus::Valid)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(key: &str, is_current: bool, status: LicenseStatus) -> License {
        License {
            key: key.to_string(),
            is_current,
            status,
        }
    }

    #[test]
    fn selects_the_current_license() {
        let licenses = vec![
            license("old", false, LicenseStatus::Expired),
            license("live", true, LicenseStatus::Valid),
        ];

        let active = active_license(&licenses).expect("should find the current license");
        assert_eq!(active.key, "live");
    }

    #[test]
    fn selection_ignores_order_of_non_current_records() {
        let a = license("a", false, LicenseStatus::Expired);
        let b = license("b", false, LicenseStatus::Pending);
        let current = license("live", true, LicenseStatus::Valid);

        let one = vec![a.clone(), b.clone(), current.clone()];
        let other = vec![b, current, a];

        assert_eq!(active_license(&one).unwrap().key, "live");
        assert_eq!(active_license(&other).unwrap().key, "live");
    }

    #[test]
    fn empty_or_fully_inactive_sets_yield_none() {
        assert!(active_license(&[]).is_none());

        let licenses = vec![license("old", false, LicenseStatus::Expired)];
        assert!(active_license(&licenses).is_none());
    }

    #[test]
    fn license_active_requires_a_valid_current_license() {
        let mut payload = LicensePayload::default();
        assert!(!license_active(&payload));

        payload.licenses = vec![license("pending", true, LicenseStatus::Pending)];
        assert!(!license_active(&payload));

        payload.licenses = vec![license("live", true, LicenseStatus::Valid)];
        assert!(license_active(&payload));
    }
}
