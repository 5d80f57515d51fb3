//! One simulation step, audited.
//!
//! [`run_step`] wraps [`PlayDesk::step_all_amebas`] with the bookkeeping the
//! runner needs:
//!
//! 1. **Measure** -- total desk energy before the step.
//! 2. **Step** -- move every ameba, clean up eaten food, regenerate.
//! 3. **Audit** -- check the energy balance and log any anomaly.
//!
//! A failing move aborts the step. Moves already made stay applied and the
//! error carries the step number.

use ameba_desk::{DeskError, PlayDesk};
use ameba_types::{FoodGeneration, MovementRecord};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::audit::{AuditResult, EnergyAudit};

/// Errors that can occur during step execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// A desk operation failed partway through the step.
    #[error("step {step} failed: {source}")]
    Desk {
        /// The step that failed.
        step: u64,
        /// The underlying desk error.
        source: DeskError,
    },
}

impl StepError {
    /// The step that failed.
    pub const fn step(&self) -> u64 {
        match self {
            Self::Desk { step, .. } => *step,
        }
    }
}

/// Summary of a single step's execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    /// The step number that was executed (1-based).
    pub step: u64,
    /// One record per ameba, in collection order.
    pub movements: Vec<MovementRecord>,
    /// Consumption and regeneration during the step.
    pub food_generation: FoodGeneration,
    /// Total desk energy after the step.
    pub total_energy: Decimal,
    /// The energy balance check for this step.
    pub audit: AuditResult,
}

/// Execute one complete step on `desk`.
///
/// # Errors
///
/// Returns [`StepError::Desk`] if a move, the regeneration, or the energy
/// measurement fails.
pub fn run_step(desk: &mut PlayDesk, step: u64) -> Result<StepSummary, StepError> {
    let wrap = move |source: DeskError| StepError::Desk { step, source };

    let before = desk.total_energy().map_err(wrap)?;
    let outcome = desk.step_all_amebas().map_err(wrap)?;
    let after = desk.total_energy().map_err(wrap)?;

    let audit = EnergyAudit {
        step,
        before,
        after,
        movements: &outcome.movements,
        regenerated: outcome.food_generation.energy_added,
    }
    .verify();

    if let AuditResult::Anomaly(anomaly) = &audit {
        warn!(
            step,
            expected = %anomaly.expected,
            actual = %anomaly.actual,
            "Energy audit anomaly"
        );
    }

    debug!(
        step,
        moves = outcome.movements.len(),
        foods_consumed = outcome.food_generation.foods_consumed,
        foods_generated = outcome.food_generation.foods_generated,
        total_energy = %after,
        "Step completed"
    );

    Ok(StepSummary {
        step,
        movements: outcome.movements,
        food_generation: outcome.food_generation,
        total_energy: after,
        audit,
    })
}
