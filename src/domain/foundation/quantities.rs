//! Positive-count value objects: plan capacity, participant counts, durations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum number of simultaneous participants a plan admits. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a Capacity, rejecting zero.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range("capacity", 1, i64::from(u32::MAX), 0));
        }
        Ok(Self(value))
    }

    /// Returns the capacity as u32.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of participants covered by one enrollment. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantCount(u32);

impl ParticipantCount {
    /// Creates a ParticipantCount, rejecting zero.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "participant_count",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the count as u32.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParticipantCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plan duration in whole days. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationDays(u16);

impl DurationDays {
    /// Creates a DurationDays, rejecting zero.
    pub fn try_new(value: u16) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range("duration_days", 1, i64::from(u16::MAX), 0));
        }
        Ok(Self(value))
    }

    /// Returns the duration as u16.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
