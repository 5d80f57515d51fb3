//! Snapshot and record structs produced by the simulation.
//!
//! These are plain data: the engine fills them in, hosts serialize them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Direction, EntityKind};
use crate::grid::{BoardSize, Position};
use crate::ids::{AmebaId, FoodId};

// ---------------------------------------------------------------------------
// Desk state
// ---------------------------------------------------------------------------

/// One live entity as seen from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntitySnapshot {
    /// Whether this is food or an ameba.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Current energy.
    #[ts(as = "String")]
    pub energy: Decimal,
    /// Current cell.
    pub position: Position,
}

/// The live contents of a play desk at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DeskSnapshot {
    /// Live amebas in collection order.
    pub amebas: Vec<EntitySnapshot>,
    /// Live (non-deleted) foods in collection order.
    pub foods: Vec<EntitySnapshot>,
    /// Board dimensions.
    pub board_size: BoardSize,
}

// ---------------------------------------------------------------------------
// Per-step records
// ---------------------------------------------------------------------------

/// A food item eaten during a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConsumedFood {
    /// The eaten food.
    pub food_id: FoodId,
    /// Where it was.
    pub position: Position,
    /// The energy it transferred to the ameba.
    #[ts(as = "String")]
    pub energy: Decimal,
}

/// The outcome of one ameba's move within a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MovementRecord {
    /// The ameba that moved.
    pub ameba_id: AmebaId,
    /// Direction chosen by the decision policy.
    pub direction: Direction,
    /// Cell before the move.
    pub old_position: Position,
    /// Cell after the move (wrapped).
    pub new_position: Position,
    /// Net energy change: food gained minus the move cost.
    #[ts(as = "String")]
    pub energy_change: Decimal,
    /// The food eaten on arrival, if any.
    pub food_consumed: Option<ConsumedFood>,
}

/// Food economy figures for one step (or totalled over a run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FoodGeneration {
    /// Foods eaten by amebas.
    pub foods_consumed: u32,
    /// Foods placed by regeneration.
    pub foods_generated: u32,
    /// Energy carried by the generated foods.
    #[ts(as = "String")]
    pub energy_added: Decimal,
}

impl FoodGeneration {
    /// Add another step's figures to this running total.
    ///
    /// Counts saturate; an energy overflow leaves `energy_added` unchanged
    /// and returns `false`.
    pub fn accumulate(&mut self, other: &Self) -> bool {
        self.foods_consumed = self.foods_consumed.saturating_add(other.foods_consumed);
        self.foods_generated = self.foods_generated.saturating_add(other.foods_generated);
        let Some(total) = self.energy_added.checked_add(other.energy_added) else {
            return false;
        };
        self.energy_added = total;
        true
    }
}

/// Everything recorded about one simulation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StepRecord {
    /// 1-based step number within the run.
    pub step_number: u64,
    /// One record per ameba, in collection order.
    pub movements: Vec<MovementRecord>,
    /// Consumption and regeneration during the step.
    pub food_generation: FoodGeneration,
    /// Desk contents after cleanup and regeneration.
    pub game_state: DeskSnapshot,
    /// Σ live food energy + Σ ameba energy after the step.
    #[ts(as = "String")]
    pub total_energy: Decimal,
}

/// Aggregate figures for a finished (or halted) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationStatistics {
    /// Steps that ran to completion.
    pub steps_completed: u64,
    /// Live amebas at the end.
    pub final_ameba_count: u32,
    /// Live foods at the end.
    pub final_food_count: u32,
    /// Σ live food energy + Σ ameba energy at the end.
    #[ts(as = "String")]
    pub total_energy: Decimal,
    /// Foods eaten over the whole run.
    pub total_foods_consumed: u32,
    /// Foods generated over the whole run.
    pub total_foods_generated: u32,
}
