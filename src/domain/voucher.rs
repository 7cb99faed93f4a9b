//! Voucher lifecycle
//!
//! Journal and cash/check vouchers move draft -> printed -> approved ->
//! released. The status is derived from which lifecycle dates are set.

use chrono::{DateTime, NaiveDate, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherStatus {
    Draft,
    Printed,
    Approved,
    Released,
}

impl VoucherStatus {
    /// Status implied by the lifecycle dates of a voucher
    pub fn from_dates(
        printed: Option<DateTime<Utc>>,
        approved: Option<DateTime<Utc>>,
        released: Option<DateTime<Utc>>,
    ) -> Self {
        match (printed, approved, released) {
            (_, _, Some(_)) => Self::Released,
            (_, Some(_), None) => Self::Approved,
            (Some(_), None, None) => Self::Printed,
            (None, None, None) => Self::Draft,
        }
    }

    /// Next status in the lifecycle
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Draft => Some(Self::Printed),
            Self::Printed => Some(Self::Approved),
            Self::Approved => Some(Self::Released),
            Self::Released => None,
        }
    }

    /// Whether a voucher in this status may move to `to`.
    ///
    /// Printing may be repeated until the voucher is approved.
    pub fn can_transition(&self, to: VoucherStatus) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Printed)
                | (Self::Printed, Self::Printed)
                | (Self::Printed, Self::Approved)
                | (Self::Approved, Self::Released)
        )
    }

    /// Whether the voucher's contents may still change
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Printed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Printed => "printed",
            Self::Approved => "approved",
            Self::Released => "released",
        }
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable reference such as `CV-20240309-K3ZQ8A`
pub fn reference_number(prefix: &str, date: NaiveDate) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{}-{}-{}", prefix, date.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_dates() {
        let now = Some(Utc::now());
        assert_eq!(VoucherStatus::from_dates(None, None, None), VoucherStatus::Draft);
        assert_eq!(VoucherStatus::from_dates(now, None, None), VoucherStatus::Printed);
        assert_eq!(VoucherStatus::from_dates(now, now, None), VoucherStatus::Approved);
        assert_eq!(VoucherStatus::from_dates(now, now, now), VoucherStatus::Released);
    }

    #[test]
    fn test_transitions_follow_lifecycle() {
        assert!(VoucherStatus::Draft.can_transition(VoucherStatus::Printed));
        assert!(VoucherStatus::Printed.can_transition(VoucherStatus::Printed));
        assert!(VoucherStatus::Printed.can_transition(VoucherStatus::Approved));
        assert!(VoucherStatus::Approved.can_transition(VoucherStatus::Released));

        assert!(!VoucherStatus::Draft.can_transition(VoucherStatus::Approved));
        assert!(!VoucherStatus::Draft.can_transition(VoucherStatus::Released));
        assert!(!VoucherStatus::Approved.can_transition(VoucherStatus::Printed));
        assert!(!VoucherStatus::Released.can_transition(VoucherStatus::Released));
        assert_eq!(VoucherStatus::Released.next(), None);
    }

    #[test]
    fn test_editable_until_approved() {
        assert!(VoucherStatus::Draft.is_editable());
        assert!(VoucherStatus::Printed.is_editable());
        assert!(!VoucherStatus::Approved.is_editable());
        assert!(!VoucherStatus::Released.is_editable());
    }

    #[test]
    fn test_reference_number_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let reference = reference_number("CV", date);
        assert!(reference.starts_with("CV-20240309-"));
        assert_eq!(reference.len(), "CV-20240309-".len() + 6);
        assert!(reference[12..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
