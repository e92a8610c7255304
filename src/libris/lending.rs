//! # Lending
//!
//! A lendable item is either `Available` or `Borrowed`. Both transitions always
//! succeed; a redundant call (lending something already out, returning something
//! that was never lent) leaves the state alone and reports it through
//! [`LoanOutcome`] instead of an error.
//!
//! ```text
//! state       lend()                     return_loan()
//! Available   -> Borrowed (Lent)         stays (NotBorrowed)
//! Borrowed    stays (AlreadyBorrowed)    -> Available (Returned)
//! ```
//!
//! The catalog records only *that* a loan is outstanding, never *who* holds it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanState {
    #[default]
    Available,
    Borrowed,
}

impl LoanState {
    pub fn is_borrowed(self) -> bool {
        self == Self::Borrowed
    }

    pub fn from_borrowed(borrowed: bool) -> Self {
        if borrowed {
            Self::Borrowed
        } else {
            Self::Available
        }
    }
}

impl fmt::Display for LoanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Borrowed => write!(f, "Borrowed"),
        }
    }
}

/// Result of a lend or return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanOutcome {
    Lent,
    AlreadyBorrowed,
    Returned,
    NotBorrowed,
}

impl LoanOutcome {
    /// A redundant request changed nothing.
    pub fn is_redundant(self) -> bool {
        matches!(self, Self::AlreadyBorrowed | Self::NotBorrowed)
    }

    pub fn message(self, title: &str) -> String {
        match self {
            Self::Lent => format!("'{}' has been lent.", title),
            Self::AlreadyBorrowed => format!("'{}' is already borrowed.", title),
            Self::Returned => format!("'{}' has been returned.", title),
            Self::NotBorrowed => format!("'{}' was not borrowed.", title),
        }
    }
}

/// Capability for items that can go out on loan.
///
/// Implementors keep their own [`LoanState`]; the provided `lend` and
/// `return_loan` drive the transitions through `set_loan_state`.
pub trait Lendable {
    fn loan_state(&self) -> LoanState;

    fn set_loan_state(&mut self, state: LoanState);

    /// Label used in tracing output.
    fn loan_label(&self) -> &str;

    fn lend(&mut self) -> LoanOutcome {
        match self.loan_state() {
            LoanState::Available => {
                self.set_loan_state(LoanState::Borrowed);
                tracing::info!(item = self.loan_label(), "item lent");
                LoanOutcome::Lent
            }
            LoanState::Borrowed => {
                tracing::debug!(item = self.loan_label(), "lend ignored, already borrowed");
                LoanOutcome::AlreadyBorrowed
            }
        }
    }

    fn return_loan(&mut self) -> LoanOutcome {
        match self.loan_state() {
            LoanState::Borrowed => {
                self.set_loan_state(LoanState::Available);
                tracing::info!(item = self.loan_label(), "item returned");
                LoanOutcome::Returned
            }
            LoanState::Available => {
                tracing::debug!(item = self.loan_label(), "return ignored, not borrowed");
                LoanOutcome::NotBorrowed
            }
        }
    }
}
