//! Ownership roster for a plan.
//!
//! Holds the set of entrepreneurs participating in one plan together with
//! their roles and revenue shares, and enforces the structural invariants:
//!
//! - entrepreneur ids are unique within the roster
//! - whenever the roster is non-empty, exactly one entry is principal,
//!   and that entry has the organizer role
//! - the sum of assigned revenue shares never exceeds 100
//!
//! Every operation is validate-then-commit: a rejected call leaves the
//! roster exactly as it was, and no call exposes an intermediate state
//! that violates the invariants.

use crate::domain::foundation::{EntrepreneurId, RevenueShare};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PlanError;

/// Role an entrepreneur plays within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerRole {
    /// Runs the plan; only organizers can hold principal status.
    Organizer,

    /// Participates without operational responsibility.
    Collaborator,
}

impl fmt::Display for OwnerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OwnerRole::Organizer => "organizer",
            OwnerRole::Collaborator => "collaborator",
        };
        write!(f, "{}", s)
    }
}

/// Roster sizing policy.
///
/// The cap mirrors the admin form's owner limit; it is configuration,
/// not an invariant of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPolicy {
    pub max_entries: usize,
}

impl RosterPolicy {
    /// Default owner cap per plan.
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates a policy with the given cap.
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }
}

/// One entrepreneur's participation in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    /// The participating entrepreneur.
    pub entrepreneur_id: EntrepreneurId,

    /// Role within the plan.
    pub role: OwnerRole,

    /// True for the single primary owner/contact of the plan.
    pub principal: bool,

    /// Free-text description of what this entrepreneur contributes.
    pub description: Option<String>,

    /// This entrepreneur's slice of the plan's revenue, if assigned.
    pub share: Option<RevenueShare>,
}

impl OwnershipEntry {
    /// Creates a non-principal entry with the given role.
    pub fn new(entrepreneur_id: EntrepreneurId, role: OwnerRole) -> Self {
        Self {
            entrepreneur_id,
            role,
            principal: false,
            description: None,
            share: None,
        }
    }

    /// Sets the participation description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the revenue share.
    pub fn with_share(mut self, share: RevenueShare) -> Self {
        self.share = Some(share);
        self
    }
}

/// The set of entrepreneurs participating in one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRoster {
    policy: RosterPolicy,
    entries: Vec<OwnershipEntry>,
}

impl OwnershipRoster {
    /// Creates an empty roster under the given policy.
    pub fn new(policy: RosterPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    /// Adds an entrepreneur to the roster.
    ///
    /// The first entry added to an empty roster becomes the principal
    /// organizer regardless of the requested role or principal flag.
    /// Later entries always join as non-principal; principal status moves
    /// only through [`set_principal`](Self::set_principal).
    ///
    /// # Errors
    ///
    /// - `DuplicateEntrepreneur` if the entrepreneur already participates
    /// - `RosterFull` at the configured cap
    /// - `ShareExceedsTotal` if the entry's share would push the sum past 100
    pub fn add(&mut self, mut entry: OwnershipEntry) -> Result<(), PlanError> {
        if self.contains(&entry.entrepreneur_id) {
            return Err(PlanError::duplicate_entrepreneur(entry.entrepreneur_id));
        }
        if self.entries.len() >= self.policy.max_entries {
            return Err(PlanError::roster_full(self.policy.max_entries));
        }
        if let Some(share) = entry.share {
            let current = self.share_total();
            if current + u32::from(share.value()) > RevenueShare::TOTAL {
                return Err(PlanError::share_exceeds_total(current, share.value()));
            }
        }

        if self.entries.is_empty() {
            entry.principal = true;
            entry.role = OwnerRole::Organizer;
        } else {
            entry.principal = false;
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Changes an entrepreneur's role.
    ///
    /// Demoting the principal to collaborator clears its principal status
    /// and promotes the first remaining organizer in the same call; if no
    /// organizer remains the roster is left principal-less and reports
    /// itself invalid until corrected.
    ///
    /// # Errors
    ///
    /// Returns `EntrepreneurNotInRoster` for unknown entrepreneurs.
    pub fn set_role(&mut self, id: &EntrepreneurId, role: OwnerRole) -> Result<(), PlanError> {
        let idx = self.index_of(id)?;
        let was_principal = self.entries[idx].principal;

        self.entries[idx].role = role;
        if role == OwnerRole::Collaborator && was_principal {
            self.entries[idx].principal = false;
            self.promote_first_organizer();
        }
        Ok(())
    }

    /// Transfers principal status to the given entrepreneur.
    ///
    /// The target's role is forced to organizer and every other entry
    /// loses principal status in the same call. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `EntrepreneurNotInRoster` for unknown entrepreneurs.
    pub fn set_principal(&mut self, id: &EntrepreneurId) -> Result<(), PlanError> {
        self.index_of(id)?;
        for entry in &mut self.entries {
            if entry.entrepreneur_id == *id {
                entry.principal = true;
                entry.role = OwnerRole::Organizer;
            } else {
                entry.principal = false;
            }
        }
        Ok(())
    }

    /// Assigns or clears an entrepreneur's revenue share.
    ///
    /// # Errors
    ///
    /// - `EntrepreneurNotInRoster` for unknown entrepreneurs
    /// - `ShareExceedsTotal` if the new value would push the sum past 100
    pub fn set_share(
        &mut self,
        id: &EntrepreneurId,
        share: Option<RevenueShare>,
    ) -> Result<(), PlanError> {
        let idx = self.index_of(id)?;

        if let Some(share) = share {
            let others: u32 = self
                .entries
                .iter()
                .filter(|e| e.entrepreneur_id != *id)
                .filter_map(|e| e.share)
                .map(|s| u32::from(s.value()))
                .sum();
            if others + u32::from(share.value()) > RevenueShare::TOTAL {
                return Err(PlanError::share_exceeds_total(others, share.value()));
            }
        }

        self.entries[idx].share = share;
        Ok(())
    }

    /// Updates an entrepreneur's participation description.
    ///
    /// # Errors
    ///
    /// Returns `EntrepreneurNotInRoster` for unknown entrepreneurs.
    pub fn set_description(
        &mut self,
        id: &EntrepreneurId,
        description: Option<String>,
    ) -> Result<(), PlanError> {
        let idx = self.index_of(id)?;
        self.entries[idx].description = description;
        Ok(())
    }

    /// Removes an entrepreneur from the roster.
    ///
    /// When the removed entry held principal status, the first remaining
    /// organizer is promoted in the same call; if no organizer remains the
    /// roster is left principal-less and reports itself invalid.
    ///
    /// # Errors
    ///
    /// - `EntrepreneurNotInRoster` for unknown entrepreneurs
    /// - `CannotRemoveLastEntry` when `enforce_non_empty` is set and this
    ///   is the only entry (drafts may pass `false` to empty the roster)
    pub fn remove(&mut self, id: &EntrepreneurId, enforce_non_empty: bool) -> Result<(), PlanError> {
        let idx = self.index_of(id)?;
        if enforce_non_empty && self.entries.len() == 1 {
            return Err(PlanError::CannotRemoveLastEntry);
        }

        let removed = self.entries.remove(idx);
        if removed.principal {
            self.promote_first_organizer();
        }
        Ok(())
    }

    /// Returns true iff the roster satisfies every publishability
    /// invariant: non-empty, exactly one principal, that principal is an
    /// organizer, and the share sum stays within 100.
    pub fn is_valid(&self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let principals: Vec<&OwnershipEntry> =
            self.entries.iter().filter(|e| e.principal).collect();
        principals.len() == 1
            && principals[0].role == OwnerRole::Organizer
            && self.share_total() <= RevenueShare::TOTAL
    }

    /// Sum of all assigned revenue shares, in whole percent.
    pub fn share_total(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| e.share)
            .map(|s| u32::from(s.value()))
            .sum()
    }

    /// Returns the principal entry, if one exists.
    pub fn principal(&self) -> Option<&OwnershipEntry> {
        self.entries.iter().find(|e| e.principal)
    }

    /// Looks up an entry by entrepreneur id.
    pub fn get(&self, id: &EntrepreneurId) -> Option<&OwnershipEntry> {
        self.entries.iter().find(|e| e.entrepreneur_id == *id)
    }

    /// Returns true if the entrepreneur participates in this roster.
    pub fn contains(&self, id: &EntrepreneurId) -> bool {
        self.get(id).is_some()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[OwnershipEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: &EntrepreneurId) -> Result<usize, PlanError> {
        self.entries
            .iter()
            .position(|e| e.entrepreneur_id == *id)
            .ok_or(PlanError::EntrepreneurNotInRoster(*id))
    }

    fn promote_first_organizer(&mut self) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.role == OwnerRole::Organizer)
        {
            entry.principal = true;
        }
    }
}

impl Default for OwnershipRoster {
    fn default() -> Self {
        Self::new(RosterPolicy::default())
    }
}
