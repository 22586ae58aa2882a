//! State machine trait for status enums.
//!
//! Both plan and enrollment lifecycles are expressed as status enums with
//! explicit transition tables. Implementing this trait gives each enum a
//! validated `transition_to` and terminal-state detection.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define the transition table; validated transitions come
/// for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BookingPhase {
        Requested,
        Approved,
        Closed,
    }

    impl StateMachine for BookingPhase {
        fn can_transition_to(&self, target: &Self) -> bool {
            use BookingPhase::*;
            matches!((self, target), (Requested, Approved) | (Approved, Closed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use BookingPhase::*;
            match self {
                Requested => vec![Approved],
                Approved => vec![Closed],
                Closed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let result = BookingPhase::Requested.transition_to(BookingPhase::Approved);
        assert_eq!(result, Ok(BookingPhase::Approved));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = BookingPhase::Requested.transition_to(BookingPhase::Closed);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_detects_closed_state() {
        assert!(BookingPhase::Closed.is_terminal());
        assert!(!BookingPhase::Requested.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in [BookingPhase::Requested, BookingPhase::Approved, BookingPhase::Closed] {
            for target in phase.valid_transitions() {
                assert!(
                    phase.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    phase,
                    target
                );
            }
        }
    }
}
