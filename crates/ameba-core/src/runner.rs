//! Multi-step simulation runner.
//!
//! [`run_steps`] drives [`run_step`] a fixed number of times, in order, and
//! collects what the host asked for:
//!
//! - **Statistics**: step count, final counts, total energy, and food totals
//!   (always).
//! - **Step records**: movements, food figures, and a desk snapshot for
//!   every step (only when recording is on).
//! - **Audit anomalies**: every step whose energy did not balance.
//!
//! The loop never exits early on its own. The first failing step halts the
//! run; the result then holds everything gathered up to that point plus
//! the error.
//!
//! [`run_step`]: crate::step::run_step

use ameba_desk::PlayDesk;
use ameba_types::{DeskSnapshot, FoodGeneration, SimulationStatistics, StepRecord};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::audit::{AuditResult, EnergyAnomaly};
use crate::step::{self, StepError};

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Live entities when the run stopped.
    pub final_state: DeskSnapshot,
    /// One record per completed step; empty unless recording was on.
    pub steps: Vec<StepRecord>,
    /// Aggregate figures for the completed steps.
    pub statistics: SimulationStatistics,
    /// Steps whose energy did not balance.
    pub anomalies: Vec<EnergyAnomaly>,
    /// The error that halted the run early, if any.
    pub halted: Option<StepError>,
}

impl SimulationResult {
    /// Whether every requested step ran.
    pub const fn is_complete(&self) -> bool {
        self.halted.is_none()
    }
}

/// Run `count` steps on `desk`, numbering them from `start + 1`.
///
/// # Arguments
///
/// * `desk` - The desk to advance
/// * `start` - Steps already run on this desk
/// * `count` - Steps to run now
/// * `record_steps` - Keep a [`StepRecord`] for every step
pub fn run_steps(
    desk: &mut PlayDesk,
    start: u64,
    count: u64,
    record_steps: bool,
) -> SimulationResult {
    let mut totals = FoodGeneration::default();
    let mut records = Vec::new();
    let mut anomalies = Vec::new();
    let mut halted = None;
    let mut completed: u64 = 0;

    info!(start, count, record_steps, "Simulation starting");

    for offset in 1..=count {
        let step_number = start.saturating_add(offset);
        let summary = match step::run_step(desk, step_number) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(step = step_number, error = %err, "Simulation halted");
                halted = Some(err);
                break;
            }
        };

        completed = completed.saturating_add(1);
        if !totals.accumulate(&summary.food_generation) {
            warn!(step = step_number, "Food energy total overflowed");
        }
        if let AuditResult::Anomaly(anomaly) = summary.audit {
            anomalies.push(anomaly);
        }
        if record_steps {
            records.push(StepRecord {
                step_number,
                movements: summary.movements,
                food_generation: summary.food_generation,
                game_state: desk.snapshot(),
                total_energy: summary.total_energy,
            });
        }
    }

    let final_state = desk.snapshot();
    let total_energy = desk.total_energy().unwrap_or_else(|source| {
        warn!(error = %source, "Final energy total overflowed");
        halted.get_or_insert(StepError::Desk {
            step: start.saturating_add(completed),
            source,
        });
        Decimal::ZERO
    });

    let statistics = SimulationStatistics {
        steps_completed: completed,
        final_ameba_count: u32::try_from(final_state.amebas.len()).unwrap_or(u32::MAX),
        final_food_count: u32::try_from(final_state.foods.len()).unwrap_or(u32::MAX),
        total_energy,
        total_foods_consumed: totals.foods_consumed,
        total_foods_generated: totals.foods_generated,
    };

    info!(
        steps_completed = statistics.steps_completed,
        final_food_count = statistics.final_food_count,
        total_energy = %statistics.total_energy,
        foods_consumed = statistics.total_foods_consumed,
        anomalies = anomalies.len(),
        halted = halted.is_some(),
        "Simulation ended"
    );

    SimulationResult {
        final_state,
        steps: records,
        statistics,
        anomalies,
        halted,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use ameba_desk::{AmebaParams, DeskError, DeskParams, FixedPolicy};
    use ameba_types::BoardSize;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::decision::ScriptedPolicy;

    fn seeded_desk(seed: u64) -> PlayDesk {
        PlayDesk::new(
            DeskParams {
                board: BoardSize::new(10, 10),
                total_energy: dec!(500),
                energy_per_food: dec!(25),
                min_food_count: 0,
                max_placement_attempts: 0,
            },
            seed,
        )
    }

    const AMEBA: AmebaParams = AmebaParams {
        visible_rows: 2,
        visible_columns: 2,
        initial_energy: Decimal::ONE_HUNDRED,
        lost_energy_per_move: Decimal::ONE,
    };

    #[test]
    fn runs_every_step_without_recording() {
        let mut desk = seeded_desk(1);
        desk.place_ameba(AMEBA, Arc::new(FixedPolicy(1))).unwrap();
        desk.generate_food().unwrap();

        let result = run_steps(&mut desk, 0, 20, false);

        assert!(result.is_complete());
        assert!(result.steps.is_empty());
        assert!(result.anomalies.is_empty());
        assert_eq!(result.statistics.steps_completed, 20);
        assert_eq!(result.statistics.final_ameba_count, 1);
        assert_eq!(result.statistics.total_energy, desk.total_energy().unwrap());
    }

    #[test]
    fn records_are_numbered_from_start() {
        let mut desk = seeded_desk(2);
        desk.place_ameba(AMEBA, Arc::new(FixedPolicy(0))).unwrap();

        let result = run_steps(&mut desk, 5, 3, true);

        let numbers: Vec<u64> = result.steps.iter().map(|r| r.step_number).collect();
        assert_eq!(numbers, vec![6, 7, 8]);
        let last = result.steps.last().unwrap();
        assert_eq!(last.game_state, result.final_state);
        assert_eq!(last.total_energy, result.statistics.total_energy);
    }

    #[test]
    fn invalid_direction_halts_with_partial_result() {
        let mut desk = seeded_desk(3);
        desk.place_ameba(AMEBA, Arc::new(ScriptedPolicy::new(vec![0, 1, 9])))
            .unwrap();

        let result = run_steps(&mut desk, 0, 10, true);

        assert_eq!(result.statistics.steps_completed, 2);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(
            result.halted,
            Some(StepError::Desk {
                step: 3,
                source: DeskError::InvalidDirection { code: 9 },
            })
        );
    }

    #[test]
    fn zero_steps_returns_current_state() {
        let mut desk = seeded_desk(4);
        desk.place_ameba(AMEBA, Arc::new(FixedPolicy(0))).unwrap();

        let result = run_steps(&mut desk, 0, 0, true);

        assert!(result.is_complete());
        assert_eq!(result.statistics.steps_completed, 0);
        assert_eq!(result.final_state.amebas.len(), 1);
        assert_eq!(result.statistics.total_energy, dec!(100));
    }
}
