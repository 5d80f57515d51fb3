//! Toroidal grid coordinates.
//!
//! The play desk is a torus: a position that leaves one edge re-enters at
//! the opposite edge. [`Position`] arithmetic is unnormalized; callers that
//! care about bounds call [`Position::adjust`] afterward.
//!
//! `adjust` performs exactly one wrap per axis. That is sufficient because
//! every mutation is either a unit move or a window offset no larger than
//! the board itself, so a component is never more than one board length
//! outside the valid range.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Direction;

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BoardSize {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
}

impl BoardSize {
    /// Create a board size.
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells on the board.
    pub fn cell_count(self) -> u64 {
        u64::from(self.rows).saturating_mul(u64::from(self.columns))
    }

    /// Whether `position` lies inside `[0, rows) x [0, columns)`.
    pub fn contains(self, position: Position) -> bool {
        (0..i64::from(self.rows)).contains(&position.row)
            && (0..i64::from(self.columns)).contains(&position.column)
    }
}

/// An integer `(row, column)` coordinate on the play desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Row index, growing downward.
    pub row: i64,
    /// Column index, growing to the right.
    pub column: i64,
}

impl Position {
    /// Create a position.
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// The unit delta for a policy direction code, or `None` if the code is
    /// not one of `0..=3`.
    pub fn from_direction(code: u8) -> Option<Self> {
        Direction::from_code(code).map(Self::from)
    }

    const fn from_direction_unchecked(direction: Direction) -> Self {
        let (row, column) = direction.delta();
        Self { row, column }
    }

    /// Wrap both components into the board, one wrap per axis.
    pub fn adjust(&mut self, board: BoardSize) {
        self.row = wrap_once(self.row, i64::from(board.rows));
        self.column = wrap_once(self.column, i64::from(board.columns));
    }

    /// Return a copy of this position wrapped into the board.
    #[must_use]
    pub fn adjusted(mut self, board: BoardSize) -> Self {
        self.adjust(board);
        self
    }
}

impl From<Direction> for Position {
    fn from(direction: Direction) -> Self {
        Self::from_direction_unchecked(direction)
    }
}

impl core::ops::Add for Position {
    type Output = Self;

    /// Component-wise sum. The result is not wrapped.
    fn add(self, other: Self) -> Self {
        Self {
            row: self.row.saturating_add(other.row),
            column: self.column.saturating_add(other.column),
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

const fn wrap_once(value: i64, extent: i64) -> i64 {
    if value < 0 {
        value.saturating_add(extent)
    } else if value >= extent {
        value.saturating_sub(extent)
    } else {
        value
    }
}
