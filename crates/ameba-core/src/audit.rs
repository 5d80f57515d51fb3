//! Energy conservation audit for a single step.
//!
//! Energy enters the desk only through food regeneration and leaves only
//! through move costs. Eating is an internal transfer from a food to an
//! ameba and nets to zero. For every step the check is:
//!
//! ```text
//! after == before - sum(move costs) + regenerated energy
//! ```
//!
//! The desk guarantees this by construction. The audit exists to catch a
//! future change to move resolution or cleanup that breaks it. A violation
//! produces an [`EnergyAnomaly`].

use ameba_types::MovementRecord;
use rust_decimal::Decimal;

/// Details of a failed energy balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyAnomaly {
    /// The step that failed the check.
    pub step: u64,
    /// Total energy the balance predicts after the step.
    pub expected: Decimal,
    /// Total energy actually measured after the step.
    pub actual: Decimal,
}

/// The result of an energy audit for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditResult {
    /// Energy balanced for this step.
    Balanced,
    /// Energy was created or destroyed outside the allowed flows.
    Anomaly(EnergyAnomaly),
}

impl AuditResult {
    /// Whether the step balanced.
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

/// Inputs to one step's energy audit.
#[derive(Debug, Clone, Copy)]
pub struct EnergyAudit<'a> {
    /// The step being audited.
    pub step: u64,
    /// Total desk energy before the step.
    pub before: Decimal,
    /// Total desk energy after cleanup and regeneration.
    pub after: Decimal,
    /// The moves made during the step.
    pub movements: &'a [MovementRecord],
    /// Energy placed as new food during the step.
    pub regenerated: Decimal,
}

impl EnergyAudit<'_> {
    /// Check the balance.
    ///
    /// A move's cost is recovered from its record as
    /// `food eaten - energy change`. An overflow while summing is reported
    /// as an anomaly with `expected` set to the partial sum.
    pub fn verify(&self) -> AuditResult {
        let mut expected = self.before;
        for movement in self.movements {
            let eaten = movement
                .food_consumed
                .as_ref()
                .map_or(Decimal::ZERO, |food| food.energy);
            let Some(cost) = eaten.checked_sub(movement.energy_change) else {
                return self.anomaly(expected);
            };
            let Some(next) = expected.checked_sub(cost) else {
                return self.anomaly(expected);
            };
            expected = next;
        }

        let Some(expected) = expected.checked_add(self.regenerated) else {
            return self.anomaly(expected);
        };

        if expected == self.after {
            AuditResult::Balanced
        } else {
            self.anomaly(expected)
        }
    }

    const fn anomaly(&self, expected: Decimal) -> AuditResult {
        AuditResult::Anomaly(EnergyAnomaly {
            step: self.step,
            expected,
            actual: self.after,
        })
    }
}
