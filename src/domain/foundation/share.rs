//! Revenue share value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// One entrepreneur's slice of a plan's revenue, as a whole percentage.
///
/// A roster constrains the sum across entries to 100; this type only
/// guarantees the per-entry range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueShare(u8);

impl RevenueShare {
    /// The roster-wide cap on summed shares.
    pub const TOTAL: u32 = 100;

    /// Creates a RevenueShare, returning an error if above 100.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if u32::from(value) > Self::TOTAL {
            return Err(ValidationError::out_of_range(
                "revenue_share",
                0,
                i64::from(Self::TOTAL),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the percentage as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RevenueShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_valid_range() {
        assert_eq!(RevenueShare::try_new(0).unwrap().value(), 0);
        assert_eq!(RevenueShare::try_new(60).unwrap().value(), 60);
        assert_eq!(RevenueShare::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        let result = RevenueShare::try_new(101);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "revenue_share");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", RevenueShare::try_new(35).unwrap()), "35%");
    }

    #[test]
    fn serializes_as_bare_number() {
        let share = RevenueShare::try_new(42).unwrap();
        assert_eq!(serde_json::to_string(&share).unwrap(), "42");
    }

    #[test]
    fn ordering_works() {
        assert!(RevenueShare::try_new(20).unwrap() < RevenueShare::try_new(70).unwrap());
    }
}
