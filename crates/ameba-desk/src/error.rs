//! Error types for the `ameba-desk` crate.
//!
//! All fallible play-desk operations return [`DeskError`]. A budget with no
//! room for new food is not an error; it simply generates nothing.

use ameba_types::AmebaId;

/// Errors that can occur while mutating the play desk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    /// The decision policy returned a code outside `0..=3`.
    #[error("invalid direction code {code} (expected 0..=3)")]
    InvalidDirection {
        /// The code the policy produced.
        code: u8,
    },

    /// Random placement gave up without finding a free cell.
    #[error("no free cell found after {attempts} placement attempts")]
    NoAvailablePlacement {
        /// How many cells were sampled.
        attempts: u32,
    },

    /// No live ameba with this ID is on the desk.
    #[error("ameba not found: {0}")]
    AmebaNotFound(AmebaId),

    /// Checked energy arithmetic overflowed.
    #[error("arithmetic overflow in energy calculation: {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: &'static str,
    },
}
