//! Concrete decision policies.
//!
//! The desk consults a [`DecisionPolicy`] once per ameba per step. This
//! module provides the two policies the engine can be configured with:
//!
//! - [`ClosestFoodPolicy`] walks toward the nearest visible food. It is the
//!   heuristic a learned policy is measured against.
//! - [`ScriptedPolicy`] replays a fixed list of codes, for deterministic
//!   replays and tests.
//!
//! [`build_policy`] turns a [`PolicyConfig`] into a shareable instance.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ameba_desk::{DecisionPolicy, EnergyItem, Food, VisibleWindow};
use ameba_types::Direction;
use rust_decimal::Decimal;

use crate::config::{PolicyConfig, PolicyKind};

/// Build the policy described by `config`.
pub fn build_policy(config: &PolicyConfig) -> Arc<dyn DecisionPolicy> {
    match config.kind {
        PolicyKind::ClosestFood => Arc::new(ClosestFoodPolicy::new()),
        PolicyKind::Scripted => Arc::new(ScriptedPolicy::new(config.moves.clone())),
    }
}

// ---------------------------------------------------------------------------
// ClosestFoodPolicy
// ---------------------------------------------------------------------------

/// Move toward the nearest visible food.
///
/// The window is scanned row-major for cells with positive energy; the
/// first cell at the smallest Manhattan distance from the centre is the
/// target. When the row distance is strictly larger the move is vertical,
/// otherwise horizontal. With nothing in sight the policy moves right.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestFoodPolicy;

impl ClosestFoodPolicy {
    /// Create a new closest-food policy.
    pub const fn new() -> Self {
        Self
    }
}

impl DecisionPolicy for ClosestFoodPolicy {
    fn name(&self) -> &'static str {
        "closest_food"
    }

    fn predict(&self, window: &VisibleWindow<'_, Food>) -> u8 {
        let centre_row = i64::from(window.visible_rows());
        let centre_column = i64::from(window.visible_columns());

        let mut best: Option<(u64, i64, i64)> = None;
        for (row, cells) in window.rows().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let has_food = cell.is_some_and(|food| food.energy() > Decimal::ZERO);
                if !has_food {
                    continue;
                }
                let row_delta = to_i64(row).saturating_sub(centre_row);
                let column_delta = to_i64(column).saturating_sub(centre_column);
                let distance = row_delta.unsigned_abs().saturating_add(column_delta.unsigned_abs());
                if best.is_none_or(|(closest, _, _)| distance < closest) {
                    best = Some((distance, row_delta, column_delta));
                }
            }
        }

        let Some((_, row_delta, column_delta)) = best else {
            return Direction::Right.code();
        };

        let direction = if row_delta.unsigned_abs() > column_delta.unsigned_abs() {
            if row_delta > 0 { Direction::Down } else { Direction::Up }
        } else if column_delta < 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        direction.code()
    }
}

fn to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

// ---------------------------------------------------------------------------
// ScriptedPolicy
// ---------------------------------------------------------------------------

/// Replay a fixed sequence of codes, wrapping around at the end.
///
/// The cursor is shared by every ameba holding this instance. Codes are
/// returned verbatim, so a script may contain invalid codes on purpose. An
/// empty script always answers `0`.
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    moves: Vec<u8>,
    cursor: AtomicUsize,
}

impl ScriptedPolicy {
    /// Create a policy replaying `moves`.
    pub const fn new(moves: Vec<u8>) -> Self {
        Self {
            moves,
            cursor: AtomicUsize::new(0),
        }
    }

    /// The script being replayed.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn predict(&self, _window: &VisibleWindow<'_, Food>) -> u8 {
        let turn = self.cursor.fetch_add(1, Ordering::Relaxed);
        turn.checked_rem(self.moves.len())
            .and_then(|index| self.moves.get(index))
            .copied()
            .unwrap_or(0)
    }
}
