//! Windowed visibility around a reference cell.
//!
//! A [`VisibleWindow`] is a fixed-size
//! `(2 * visible_rows + 1) x (2 * visible_columns + 1)` grid centred on a
//! reference position. Window offset `(i, j)` with
//! `i in [-visible_rows, visible_rows]` and
//! `j in [-visible_columns, visible_columns]` is stored row-major at index
//! `(i + visible_rows, j + visible_columns)`, so the reference cell sits at
//! `(visible_rows, visible_columns)`.
//!
//! Every offset is wrapped onto the torus before lookup. Lookup is a linear
//! scan and the first match in collection order wins.
//!
//! The query is pure: it borrows its inputs and keeps no state, so it can
//! run for many reference positions at once.

use ameba_types::{BoardSize, Position};
use rust_decimal::Decimal;

use crate::entity::{EnergyItem, PositionItem};
use crate::params::window_extent;

/// Find the first entity at exactly `position`.
pub fn find_by_position<'a, T: PositionItem>(
    position: Position,
    entities: &[&'a T],
) -> Option<&'a T> {
    entities
        .iter()
        .copied()
        .find(|entity| entity.position() == position)
}

/// Builds visible windows of one fixed size on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityQuery {
    visible_rows: u32,
    visible_columns: u32,
    board: BoardSize,
}

impl VisibilityQuery {
    /// Create a query for windows of the given radii on `board`.
    ///
    /// Radii larger than the board would need more than one wrap per axis;
    /// configuration validation rules them out.
    pub const fn new(visible_rows: u32, visible_columns: u32, board: BoardSize) -> Self {
        Self {
            visible_rows,
            visible_columns,
            board,
        }
    }

    /// Build the window centred on `reference` over `entities`.
    pub fn fetch<'a, T: PositionItem>(
        &self,
        reference: Position,
        entities: &[&'a T],
    ) -> VisibleWindow<'a, T> {
        let rows = i64::from(self.visible_rows);
        let columns = i64::from(self.visible_columns);
        let height = window_extent(self.visible_rows);
        let width = window_extent(self.visible_columns);

        let mut cells = Vec::with_capacity(height.saturating_mul(width));
        for i in -rows..=rows {
            for j in -columns..=columns {
                let target = (reference + Position::new(i, j)).adjusted(self.board);
                cells.push(find_by_position(target, entities));
            }
        }

        VisibleWindow {
            visible_rows: self.visible_rows,
            visible_columns: self.visible_columns,
            cells,
        }
    }
}

/// A fixed-size snapshot of the entities around one cell.
#[derive(Debug)]
pub struct VisibleWindow<'a, T> {
    visible_rows: u32,
    visible_columns: u32,
    cells: Vec<Option<&'a T>>,
}

impl<'a, T> VisibleWindow<'a, T> {
    /// Vertical radius.
    pub const fn visible_rows(&self) -> u32 {
        self.visible_rows
    }

    /// Horizontal radius.
    pub const fn visible_columns(&self) -> u32 {
        self.visible_columns
    }

    /// Number of window rows.
    pub fn height(&self) -> usize {
        window_extent(self.visible_rows)
    }

    /// Number of window columns.
    pub fn width(&self) -> usize {
        window_extent(self.visible_columns)
    }

    /// The entity at array index `(row, column)`, or `None` if the cell is
    /// empty or the index is outside the window.
    pub fn cell(&self, row: usize, column: usize) -> Option<&'a T> {
        if column >= self.width() {
            return None;
        }
        let index = row.checked_mul(self.width())?.checked_add(column)?;
        self.cells.get(index).copied().flatten()
    }

    /// The entity at offset `(row, column)` from the reference cell.
    pub fn at_offset(&self, row: i64, column: i64) -> Option<&'a T> {
        let row = usize::try_from(row.checked_add(i64::from(self.visible_rows))?).ok()?;
        let column =
            usize::try_from(column.checked_add(i64::from(self.visible_columns))?).ok()?;
        self.cell(row, column)
    }

    /// Iterate over window rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<&'a T>]> {
        self.cells.chunks(self.width())
    }
}

impl<T: EnergyItem> VisibleWindow<'_, T> {
    /// Energy at array index `(row, column)`; empty cells read as zero.
    pub fn energy_at(&self, row: usize, column: usize) -> Decimal {
        self.cell(row, column)
            .map_or(Decimal::ZERO, EnergyItem::energy)
    }

    /// The window as a row-major energy matrix; empty cells read as zero.
    pub fn energy_grid(&self) -> Vec<Vec<Decimal>> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(Decimal::ZERO, EnergyItem::energy))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entity::Food;

    fn scenario_foods() -> Vec<Food> {
        vec![
            Food::new(dec!(1), Position::new(1, 1)),
            Food::new(dec!(2), Position::new(3, 3)),
            Food::new(dec!(3), Position::new(2, 6)),
            Food::new(dec!(4), Position::new(6, 0)),
        ]
    }

    #[test]
    fn energy_grid_matches_wrapped_scenario() {
        let foods = scenario_foods();
        let refs: Vec<&Food> = foods.iter().collect();
        let query = VisibilityQuery::new(2, 2, BoardSize::new(7, 7));

        let window = query.fetch(Position::new(0, 1), &refs);

        let expected = vec![
            vec![dec!(0), dec!(0), dec!(0), dec!(0), dec!(0)],
            vec![dec!(0), dec!(4), dec!(0), dec!(0), dec!(0)],
            vec![dec!(0), dec!(0), dec!(0), dec!(0), dec!(0)],
            vec![dec!(0), dec!(0), dec!(1), dec!(0), dec!(0)],
            vec![dec!(3), dec!(0), dec!(0), dec!(0), dec!(0)],
        ];
        assert_eq!(window.energy_grid(), expected);
    }

    #[test]
    fn offset_one_row_down_lands_at_index_three_two() {
        let foods = vec![Food::new(dec!(9), Position::new(4, 4))];
        let refs: Vec<&Food> = foods.iter().collect();
        let query = VisibilityQuery::new(2, 2, BoardSize::new(10, 10));

        let window = query.fetch(Position::new(3, 4), &refs);

        assert_eq!(window.energy_at(3, 2), dec!(9));
        assert!(window.at_offset(1, 0).is_some());
        assert!(window.at_offset(0, 0).is_none());
    }

    #[test]
    fn window_has_fixed_dimensions() {
        let foods: Vec<Food> = Vec::new();
        let refs: Vec<&Food> = foods.iter().collect();
        let query = VisibilityQuery::new(1, 3, BoardSize::new(5, 5));

        let window = query.fetch(Position::new(0, 0), &refs);

        assert_eq!(window.height(), 3);
        assert_eq!(window.width(), 7);
        assert_eq!(window.rows().count(), 3);
        assert!(window.rows().all(|row| row.len() == 7));
        assert!(window.energy_grid().iter().flatten().all(Decimal::is_zero));
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let foods = vec![
            Food::new(dec!(7), Position::new(2, 2)),
            Food::new(dec!(8), Position::new(2, 2)),
        ];
        let refs: Vec<&Food> = foods.iter().collect();

        let found = find_by_position(Position::new(2, 2), &refs);

        assert_eq!(found.map(EnergyItem::energy), Some(dec!(7)));
    }

    #[test]
    fn out_of_window_lookups_are_empty() {
        let foods = scenario_foods();
        let refs: Vec<&Food> = foods.iter().collect();
        let query = VisibilityQuery::new(2, 2, BoardSize::new(7, 7));
        let window = query.fetch(Position::new(0, 1), &refs);

        assert!(window.cell(5, 0).is_none());
        assert!(window.cell(0, 5).is_none());
        assert!(window.at_offset(-3, 0).is_none());
        assert!(window.at_offset(0, 3).is_none());
    }
}
