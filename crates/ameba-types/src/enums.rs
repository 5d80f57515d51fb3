//! Enumeration types for the play-desk simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A unit move on the grid, as chosen by a decision policy.
///
/// Rows grow downward and columns grow to the right. Each direction has a
/// stable numeric code, which is what decision policies emit:
///
/// | Code | Direction | Delta (row, column) |
/// |------|-----------|---------------------|
/// | 0    | Right     | (0, +1)             |
/// | 1    | Down      | (+1, 0)             |
/// | 2    | Left      | (0, -1)             |
/// | 3    | Up        | (-1, 0)             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Direction {
    /// One column to the right (code 0).
    Right,
    /// One row down (code 1).
    Down,
    /// One column to the left (code 2).
    Left,
    /// One row up (code 3).
    Up,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Decode a policy direction code. Returns `None` for any code
    /// outside `0..=3`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Right),
            1 => Some(Self::Down),
            2 => Some(Self::Left),
            3 => Some(Self::Up),
            _ => None,
        }
    }

    /// The numeric code of this direction.
    pub const fn code(self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Up => 3,
        }
    }

    /// The unit `(row, column)` delta of this direction.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The kind of entity occupying a cell of the play desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EntityKind {
    /// A stationary food item.
    Food,
    /// A moving, energy-consuming agent.
    Ameba,
}
