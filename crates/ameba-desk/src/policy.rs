//! The decision-policy capability consumed by move resolution.
//!
//! Each step, the desk shows every ameba its [`VisibleWindow`] of food and
//! asks the ameba's [`DecisionPolicy`] for a direction code. The desk only
//! requires that the call is synchronous and returns *some* `u8`; codes
//! outside `0..=3` are rejected by the desk as
//! [`DeskError::InvalidDirection`], never silently remapped.
//!
//! How a policy arrives at its answer (a trained network, a heuristic, a
//! replayed script) is its own concern, as is any training or persistence.
//!
//! [`DeskError::InvalidDirection`]: crate::DeskError::InvalidDirection

use crate::entity::Food;
use crate::visibility::VisibleWindow;

/// A source of movement decisions for amebas.
///
/// Policies are shared between amebas through `Arc`, so `predict` takes
/// `&self`; a policy with internal state uses interior mutability.
pub trait DecisionPolicy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Choose a direction code for the ameba at the window's centre.
    fn predict(&self, window: &VisibleWindow<'_, Food>) -> u8;
}

/// A policy that always returns the same code, whatever it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPolicy(pub u8);

impl DecisionPolicy for FixedPolicy {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn predict(&self, _window: &VisibleWindow<'_, Food>) -> u8 {
        self.0
    }
}
