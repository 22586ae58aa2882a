//! Caller-identity descriptor for mutating operations.
//!
//! Every mutating call into the core carries an `Actor`. The core does not
//! authenticate; it only uses the actor to gate administrative overrides and
//! self-service rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CustomerId, EntrepreneurId};

/// Who is invoking an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// Platform administrator. May override ownership locks.
    Administrator,

    /// An entrepreneur acting on a plan they participate in.
    Entrepreneur { id: EntrepreneurId },

    /// A customer acting on their own enrollments.
    Customer { id: CustomerId },
}

impl Actor {
    /// Creates an entrepreneur actor.
    pub fn entrepreneur(id: EntrepreneurId) -> Self {
        Actor::Entrepreneur { id }
    }

    /// Creates a customer actor.
    pub fn customer(id: CustomerId) -> Self {
        Actor::Customer { id }
    }

    /// Returns true for platform administrators.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Actor::Administrator)
    }

    /// Returns the entrepreneur id if this actor is an entrepreneur.
    pub fn entrepreneur_id(&self) -> Option<EntrepreneurId> {
        match self {
            Actor::Entrepreneur { id } => Some(*id),
            _ => None,
        }
    }

    /// Returns the customer id if this actor is a customer.
    pub fn customer_id(&self) -> Option<CustomerId> {
        match self {
            Actor::Customer { id } => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Administrator => write!(f, "administrator"),
            Actor::Entrepreneur { id } => write!(f, "entrepreneur:{}", id),
            Actor::Customer { id } => write!(f, "customer:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_is_recognized() {
        assert!(Actor::Administrator.is_administrator());
        assert!(!Actor::entrepreneur(EntrepreneurId::new()).is_administrator());
    }

    #[test]
    fn entrepreneur_id_accessor_works() {
        let id = EntrepreneurId::new();
        assert_eq!(Actor::entrepreneur(id).entrepreneur_id(), Some(id));
        assert_eq!(Actor::Administrator.entrepreneur_id(), None);
    }

    #[test]
    fn customer_id_accessor_works() {
        let id = CustomerId::new();
        assert_eq!(Actor::customer(id).customer_id(), Some(id));
        assert_eq!(Actor::Administrator.customer_id(), None);
    }

    #[test]
    fn display_includes_role() {
        let id = CustomerId::new();
        let shown = format!("{}", Actor::customer(id));
        assert!(shown.starts_with("customer:"));
        assert!(shown.contains(&id.to_string()));
    }
}
