//! Tunable parameters for the desk and its amebas.
//!
//! These mirror the `play_desk` and `ameba` sections of the game
//! configuration. The engine builds them from the validated configuration
//! and passes them down; this crate never reads files.

use ameba_types::BoardSize;
use rust_decimal::Decimal;

/// Sampling attempts per board cell when no explicit cap is configured.
pub const DEFAULT_ATTEMPTS_PER_CELL: u32 = 16;

/// Board size and food economy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskParams {
    /// Board dimensions.
    pub board: BoardSize,

    /// Target total energy (food + amebas) regeneration tracks (default: 10000).
    pub total_energy: Decimal,

    /// Energy of every generated food (default: 50). Must be positive.
    pub energy_per_food: Decimal,

    /// Live food floor enforced after regeneration (default: 0, disabled).
    ///
    /// A non-zero floor can push total energy above `total_energy`.
    pub min_food_count: u32,

    /// Cap on random placement samples (default: 0, meaning
    /// [`DEFAULT_ATTEMPTS_PER_CELL`] per board cell).
    pub max_placement_attempts: u32,
}

impl DeskParams {
    /// The effective random placement cap.
    pub fn placement_attempts(&self) -> u32 {
        if self.max_placement_attempts > 0 {
            return self.max_placement_attempts;
        }
        let attempts = self
            .board
            .cell_count()
            .saturating_mul(u64::from(DEFAULT_ATTEMPTS_PER_CELL));
        u32::try_from(attempts).unwrap_or(u32::MAX)
    }
}

impl Default for DeskParams {
    fn default() -> Self {
        Self {
            board: BoardSize::new(32, 32),
            total_energy: Decimal::new(10_000, 0),
            energy_per_food: Decimal::new(50, 0),
            min_food_count: 0,
            max_placement_attempts: 0,
        }
    }
}

/// Per-ameba parameters: visibility and energy costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmebaParams {
    /// Rows visible above and below the ameba (default: 5).
    pub visible_rows: u32,

    /// Columns visible left and right of the ameba (default: 5).
    pub visible_columns: u32,

    /// Energy of a newly placed ameba (default: 100).
    pub initial_energy: Decimal,

    /// Energy spent on every move, food or not (default: 1).
    pub lost_energy_per_move: Decimal,
}

impl AmebaParams {
    /// Height of the visible window: `2 * visible_rows + 1`.
    pub fn window_height(&self) -> usize {
        window_extent(self.visible_rows)
    }

    /// Width of the visible window: `2 * visible_columns + 1`.
    pub fn window_width(&self) -> usize {
        window_extent(self.visible_columns)
    }
}

impl Default for AmebaParams {
    fn default() -> Self {
        Self {
            visible_rows: 5,
            visible_columns: 5,
            initial_energy: Decimal::new(100, 0),
            lost_energy_per_move: Decimal::ONE,
        }
    }
}

/// `2 * radius + 1`, saturating.
pub(crate) fn window_extent(radius: u32) -> usize {
    usize::try_from(radius)
        .unwrap_or(usize::MAX)
        .saturating_mul(2)
        .saturating_add(1)
}
