//! Payment method chosen by the customer at enrollment time.
//!
//! The core records the chosen method; charging is handled outside the core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer intends to pay for an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,

    /// Direct bank transfer.
    BankTransfer,

    /// Cash paid on arrival at the plan's meeting point.
    CashOnArrival,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::CashOnArrival => "cash_on_arrival",
        };
        write!(f, "{}", s)
    }
}
