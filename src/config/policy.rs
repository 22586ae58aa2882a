//! Domain policy configuration.
//!
//! Policy constants that are configuration rather than invariants: the
//! roster cap mirrors the admin form's owner limit and may be tuned per
//! deployment.

use serde::Deserialize;

use crate::domain::plan::RosterPolicy;

use super::error::ValidationError;

/// Tunable domain policy values.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Maximum number of entrepreneurs on one plan's roster.
    #[serde(default = "default_max_roster_entries")]
    pub max_roster_entries: usize,
}

fn default_max_roster_entries() -> usize {
    RosterPolicy::DEFAULT_MAX_ENTRIES
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_roster_entries: default_max_roster_entries(),
        }
    }
}

impl PolicyConfig {
    /// Validates the policy values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_roster_entries == 0 {
            return Err(ValidationError::RosterCapTooSmall);
        }
        if self.max_roster_entries > 100 {
            return Err(ValidationError::RosterCapTooLarge);
        }
        Ok(())
    }

    /// Builds the roster policy handed to new plans.
    pub fn roster_policy(&self) -> RosterPolicy {
        RosterPolicy::new(self.max_roster_entries)
    }
}
