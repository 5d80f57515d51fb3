//! The play desk: entity ownership, food economy, and move resolution.
//!
//! A [`PlayDesk`] exclusively owns its foods and amebas. All mutation goes
//! through `&mut self`, and one call to [`PlayDesk::step_all_amebas`] is a
//! complete step:
//!
//! 1. Every live ameba, in collection order, looks at its window, asks its
//!    policy for a direction, pays the move cost, and eats the live food on
//!    its destination cell if there is one.
//! 2. Cleanup purges the foods tombstoned in (1).
//! 3. Regeneration tops the food supply back up toward the energy budget.
//!
//! Eaten food is tombstoned immediately, so a later ameba in the same step
//! can neither see nor eat it.
//!
//! # Energy budget
//!
//! `generate_food` places foods of `energy_per_food` while the energy added
//! so far is below `total_energy - (Σ live food + Σ ameba energy)`. It stops
//! after at most one increment past the budget and places nothing when the
//! budget is already met.

use std::collections::HashSet;
use std::sync::Arc;

use ameba_types::{
    AmebaId, BoardSize, ConsumedFood, DeskSnapshot, Direction, FoodGeneration, MovementRecord,
    Position,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::entity::{Ameba, DeskEntity, EnergyItem, Food, PositionItem};
use crate::error::DeskError;
use crate::params::{AmebaParams, DeskParams};
use crate::policy::DecisionPolicy;
use crate::visibility::{VisibilityQuery, VisibleWindow};

/// Foods and energy placed by one regeneration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Number of foods placed.
    pub foods_generated: u32,
    /// Total energy of the placed foods.
    pub energy_added: Decimal,
}

/// Everything one full step produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// One record per ameba, in collection order.
    pub movements: Vec<MovementRecord>,
    /// Consumption and regeneration figures.
    pub food_generation: FoodGeneration,
}

/// The grid and everything on it.
#[derive(Debug, Clone)]
pub struct PlayDesk {
    params: DeskParams,
    foods: Vec<Food>,
    amebas: Vec<Ameba>,
    rng: StdRng,
}

impl PlayDesk {
    /// Create an empty desk whose random placement is seeded with `seed`.
    pub fn new(params: DeskParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Create an empty desk drawing placements from `rng`.
    pub const fn with_rng(params: DeskParams, rng: StdRng) -> Self {
        Self {
            params,
            foods: Vec::new(),
            amebas: Vec::new(),
            rng,
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Desk parameters.
    pub const fn params(&self) -> &DeskParams {
        &self.params
    }

    /// Board dimensions.
    pub const fn board(&self) -> BoardSize {
        self.params.board
    }

    /// The food collection, tombstones included.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// The ameba collection.
    pub fn amebas(&self) -> &[Ameba] {
        &self.amebas
    }

    /// Look up an ameba by ID.
    pub fn ameba(&self, id: AmebaId) -> Option<&Ameba> {
        self.amebas.iter().find(|ameba| ameba.id() == id)
    }

    /// Foods that have not been eaten.
    pub fn live_foods(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter().filter(|food| !food.is_deleted())
    }

    /// Amebas that have not been deleted.
    pub fn live_amebas(&self) -> impl Iterator<Item = &Ameba> {
        self.amebas.iter().filter(|ameba| !ameba.is_deleted())
    }

    /// Every live entity, amebas first.
    pub fn entities(&self) -> impl Iterator<Item = DeskEntity<'_>> {
        self.live_amebas()
            .map(DeskEntity::Ameba)
            .chain(self.live_foods().map(DeskEntity::Food))
    }

    /// Whether any live entity sits on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.entities().any(|entity| entity.position() == position)
    }

    /// `Σ live food energy + Σ live ameba energy`.
    pub fn total_energy(&self) -> Result<Decimal, DeskError> {
        self.entities()
            .try_fold(Decimal::ZERO, |sum, entity| sum.checked_add(entity.energy()))
            .ok_or(DeskError::ArithmeticOverflow {
                context: "total desk energy",
            })
    }

    /// An owned view of every live entity.
    pub fn snapshot(&self) -> DeskSnapshot {
        DeskSnapshot {
            amebas: self
                .live_amebas()
                .map(|ameba| DeskEntity::Ameba(ameba).snapshot())
                .collect(),
            foods: self
                .live_foods()
                .map(|food| DeskEntity::Food(food).snapshot())
                .collect(),
            board_size: self.board(),
        }
    }

    // -------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------

    /// Add a food at a caller-chosen cell. Occupancy is not checked.
    pub fn insert_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Add an ameba at a caller-chosen cell. Occupancy is not checked.
    pub fn insert_ameba(&mut self, ameba: Ameba) -> AmebaId {
        let id = ameba.id();
        self.amebas.push(ameba);
        id
    }

    /// Sample random cells until one holds no live entity.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoAvailablePlacement`] after
    /// [`DeskParams::placement_attempts`] rejected samples, or with
    /// `attempts: 0` without sampling when every cell is occupied.
    pub fn random_empty_position(&mut self) -> Result<Position, DeskError> {
        let board = self.board();
        let occupied: HashSet<Position> = self.entities().map(|entity| entity.position()).collect();
        if u64::try_from(occupied.len()).unwrap_or(u64::MAX) >= board.cell_count() {
            return Err(DeskError::NoAvailablePlacement { attempts: 0 });
        }

        let attempts = self.params.placement_attempts();
        for _ in 0..attempts {
            let candidate = Position::new(
                i64::from(self.rng.random_range(0..board.rows)),
                i64::from(self.rng.random_range(0..board.columns)),
            );
            if !self.is_occupied(candidate) {
                return Ok(candidate);
            }
        }

        Err(DeskError::NoAvailablePlacement { attempts })
    }

    /// Place a new ameba with its initial energy at a random empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoAvailablePlacement`] if no free cell is found.
    pub fn place_ameba(
        &mut self,
        params: AmebaParams,
        policy: Arc<dyn DecisionPolicy>,
    ) -> Result<AmebaId, DeskError> {
        let position = self.random_empty_position()?;
        let ameba = Ameba::new(params, position, params.initial_energy, policy);
        debug!(ameba_id = %ameba.id(), %position, energy = %params.initial_energy, "Ameba placed");
        Ok(self.insert_ameba(ameba))
    }

    // -------------------------------------------------------------------
    // Food economy
    // -------------------------------------------------------------------

    /// Regenerate food toward the energy budget.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoAvailablePlacement`] if the board fills up
    /// before the budget is met, or [`DeskError::ArithmeticOverflow`].
    pub fn generate_food(&mut self) -> Result<GenerationReport, DeskError> {
        let mut report = GenerationReport::default();
        let per_food = self.params.energy_per_food;
        if per_food <= Decimal::ZERO {
            return Ok(report);
        }

        let used = self.total_energy()?;
        let available =
            self.params
                .total_energy
                .checked_sub(used)
                .ok_or(DeskError::ArithmeticOverflow {
                    context: "available food energy",
                })?;

        while report.energy_added < available {
            let position = self.random_empty_position()?;
            self.foods.push(Food::new(per_food, position));
            report.energy_added = report.energy_added.checked_add(per_food).ok_or(
                DeskError::ArithmeticOverflow {
                    context: "generated food energy",
                },
            )?;
            report.foods_generated = report.foods_generated.saturating_add(1);
        }

        if report.foods_generated > 0 {
            debug!(
                foods_generated = report.foods_generated,
                energy_added = %report.energy_added,
                %available,
                "Food generated"
            );
        }
        Ok(report)
    }

    /// Budget regeneration followed by the `min_food_count` floor.
    ///
    /// # Errors
    ///
    /// Same as [`generate_food`](Self::generate_food).
    pub fn replenish_food(&mut self) -> Result<GenerationReport, DeskError> {
        let mut report = self.generate_food()?;

        let floor = usize::try_from(self.params.min_food_count).unwrap_or(usize::MAX);
        let mut live = self.live_foods().count();
        while live < floor {
            let position = self.random_empty_position()?;
            self.foods
                .push(Food::new(self.params.energy_per_food, position));
            report.energy_added = report
                .energy_added
                .checked_add(self.params.energy_per_food)
                .ok_or(DeskError::ArithmeticOverflow {
                    context: "floor food energy",
                })?;
            report.foods_generated = report.foods_generated.saturating_add(1);
            live = live.saturating_add(1);
        }

        Ok(report)
    }

    /// Purge tombstoned foods. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let before = self.foods.len();
        self.foods.retain(|food| !food.is_deleted());
        before.saturating_sub(self.foods.len())
    }

    // -------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------

    /// The window of live food an ameba with `params` sees from `reference`.
    pub fn visible_window(
        &self,
        reference: Position,
        params: &AmebaParams,
    ) -> VisibleWindow<'_, Food> {
        let live: Vec<&Food> = self.live_foods().collect();
        VisibilityQuery::new(params.visible_rows, params.visible_columns, self.board())
            .fetch(reference, &live)
    }

    /// Move one ameba: observe, decide, pay, eat, commit.
    ///
    /// Nothing is mutated unless the whole move succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::AmebaNotFound`] for an unknown or deleted ameba,
    /// [`DeskError::InvalidDirection`] if the policy returns a code outside
    /// `0..=3`, or [`DeskError::ArithmeticOverflow`].
    pub fn resolve_ameba_move(&mut self, id: AmebaId) -> Result<MovementRecord, DeskError> {
        let index = self
            .amebas
            .iter()
            .position(|ameba| ameba.id() == id && !ameba.is_deleted())
            .ok_or(DeskError::AmebaNotFound(id))?;

        let (old_position, old_energy, move_cost, code) = {
            let ameba = self.amebas.get(index).ok_or(DeskError::AmebaNotFound(id))?;
            let window = self.visible_window(ameba.position(), ameba.params());
            (
                ameba.position(),
                ameba.energy(),
                ameba.params().lost_energy_per_move,
                ameba.policy().predict(&window),
            )
        };

        let direction = Direction::from_code(code).ok_or(DeskError::InvalidDirection { code })?;
        let new_position = (old_position + Position::from(direction)).adjusted(self.board());

        let food_index = self
            .foods
            .iter()
            .position(|food| !food.is_deleted() && food.position() == new_position);
        let food_consumed = food_index
            .and_then(|i| self.foods.get(i))
            .map(|food| ConsumedFood {
                food_id: food.id(),
                position: food.position(),
                energy: food.energy(),
            });
        let gained = food_consumed
            .as_ref()
            .map_or(Decimal::ZERO, |food| food.energy);

        let energy_change = gained
            .checked_sub(move_cost)
            .ok_or(DeskError::ArithmeticOverflow {
                context: "move energy change",
            })?;
        let new_energy =
            old_energy
                .checked_add(energy_change)
                .ok_or(DeskError::ArithmeticOverflow {
                    context: "ameba energy",
                })?;

        if let Some(food) = food_index.and_then(|i| self.foods.get_mut(i)) {
            food.mark_deleted();
        }
        let ameba = self
            .amebas
            .get_mut(index)
            .ok_or(DeskError::AmebaNotFound(id))?;
        ameba.set_energy(new_energy);
        ameba.set_position(new_position);

        debug!(
            ameba_id = %id,
            %direction,
            from = %old_position,
            to = %new_position,
            %energy_change,
            ate = food_consumed.is_some(),
            "Ameba moved"
        );

        Ok(MovementRecord {
            ameba_id: id,
            direction,
            old_position,
            new_position,
            energy_change,
            food_consumed,
        })
    }

    /// Run one full step: move every live ameba, clean up, regenerate.
    ///
    /// # Errors
    ///
    /// Stops at the first failing move or regeneration and returns its
    /// error. Moves made before the failure stay applied.
    pub fn step_all_amebas(&mut self) -> Result<StepOutcome, DeskError> {
        let ids: Vec<AmebaId> = self.live_amebas().map(Ameba::id).collect();

        let mut movements = Vec::with_capacity(ids.len());
        for id in ids {
            movements.push(self.resolve_ameba_move(id)?);
        }

        let purged = self.cleanup();
        let generated = self.replenish_food()?;

        Ok(StepOutcome {
            movements,
            food_generation: FoodGeneration {
                foods_consumed: u32::try_from(purged).unwrap_or(u32::MAX),
                foods_generated: generated.foods_generated,
                energy_added: generated.energy_added,
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::policy::FixedPolicy;

    fn params(rows: u32, columns: u32, total_energy: Decimal, per_food: Decimal) -> DeskParams {
        DeskParams {
            board: BoardSize::new(rows, columns),
            total_energy,
            energy_per_food: per_food,
            min_food_count: 0,
            max_placement_attempts: 0,
        }
    }

    fn ameba_params(cost: Decimal) -> AmebaParams {
        AmebaParams {
            visible_rows: 2,
            visible_columns: 2,
            initial_energy: dec!(50),
            lost_energy_per_move: cost,
        }
    }

    fn ameba_at(position: Position, energy: Decimal, code: u8) -> Ameba {
        Ameba::new(
            ameba_params(dec!(1)),
            position,
            energy,
            Arc::new(FixedPolicy(code)),
        )
    }

    #[test]
    fn generate_food_fills_budget() {
        let mut desk = PlayDesk::new(params(10, 10, dec!(100), dec!(10)), 1);
        desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(40), 0));

        let report = desk.generate_food().unwrap();

        assert_eq!(report.foods_generated, 6);
        assert_eq!(report.energy_added, dec!(60));
        assert_eq!(desk.total_energy().unwrap(), dec!(100));
    }

    #[test]
    fn generate_food_overshoots_by_less_than_one_food() {
        let mut desk = PlayDesk::new(params(10, 10, dec!(100), dec!(30)), 2);
        desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(45), 0));

        let report = desk.generate_food().unwrap();

        // 55 available: two foods (60) is the first total at or above it.
        assert_eq!(report.foods_generated, 2);
        let used = desk.total_energy().unwrap();
        assert!(used >= dec!(100));
        assert!(used < dec!(130));
    }

    #[test]
    fn generate_food_with_no_budget_adds_nothing() {
        let mut desk = PlayDesk::new(params(5, 5, dec!(10), dec!(5)), 3);
        desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(12), 0));

        let report = desk.generate_food().unwrap();

        assert_eq!(report, GenerationReport::default());
        assert_eq!(desk.foods().len(), 0);
    }

    #[test]
    fn generated_food_never_shares_a_cell() {
        let mut desk = PlayDesk::new(params(6, 6, dec!(300), dec!(10)), 4);
        desk.insert_ameba(ameba_at(Position::new(2, 2), dec!(0), 0));

        desk.generate_food().unwrap();

        let mut cells: Vec<Position> = desk.foods().iter().map(Food::position).collect();
        assert_eq!(cells.len(), 30);
        assert!(!cells.contains(&Position::new(2, 2)));
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 30);
        assert!(cells.iter().all(|p| desk.board().contains(*p)));
    }

    #[test]
    fn saturated_board_reports_no_placement() {
        let mut desk = PlayDesk::new(params(2, 2, dec!(1000), dec!(1)), 5);

        let err = desk.generate_food().unwrap_err();

        assert_eq!(err, DeskError::NoAvailablePlacement { attempts: 0 });
        assert_eq!(desk.foods().len(), 4);
    }

    #[test]
    fn full_board_fails_without_sampling() {
        let mut p = params(3, 3, dec!(0), dec!(1));
        p.max_placement_attempts = u32::MAX;
        let mut desk = PlayDesk::new(p, 6);
        for row in 0..3 {
            for column in 0..3 {
                desk.insert_food(Food::new(dec!(1), Position::new(row, column)));
            }
        }

        let err = desk.random_empty_position().unwrap_err();

        assert_eq!(err, DeskError::NoAvailablePlacement { attempts: 0 });
    }

    #[test]
    fn placement_cap_is_respected() {
        let mut p = params(200, 200, dec!(0), dec!(1));
        p.max_placement_attempts = 2;
        let mut desk = PlayDesk::new(p, 6);
        for row in 0..200 {
            for column in 0..200 {
                if (row, column) != (0, 0) {
                    desk.insert_food(Food::new(dec!(1), Position::new(row, column)));
                }
            }
        }

        let err = desk.random_empty_position().unwrap_err();

        assert_eq!(err, DeskError::NoAvailablePlacement { attempts: 2 });
    }

    #[test]
    fn place_ameba_uses_initial_energy_and_free_cell() {
        let mut desk = PlayDesk::new(params(3, 3, dec!(0), dec!(1)), 7);
        for row in 0..3 {
            for column in 0..3 {
                if (row, column) != (1, 1) {
                    desk.insert_food(Food::new(dec!(1), Position::new(row, column)));
                }
            }
        }

        let id = desk
            .place_ameba(ameba_params(dec!(1)), Arc::new(FixedPolicy(0)))
            .unwrap();

        let ameba = desk.ameba(id).unwrap();
        assert_eq!(ameba.position(), Position::new(1, 1));
        assert_eq!(ameba.energy(), dec!(50));
    }

    #[test]
    fn move_wraps_and_pays_cost() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 8);
        let id = desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(10), 3));

        let record = desk.resolve_ameba_move(id).unwrap();

        assert_eq!(record.direction, Direction::Up);
        assert_eq!(record.new_position, Position::new(6, 0));
        assert_eq!(record.energy_change, dec!(-1));
        assert!(record.food_consumed.is_none());
        let ameba = desk.ameba(id).unwrap();
        assert_eq!(ameba.position(), Position::new(6, 0));
        assert_eq!(ameba.energy(), dec!(9));
    }

    #[test]
    fn move_onto_food_eats_it() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 9);
        desk.insert_food(Food::new(dec!(4), Position::new(0, 1)));
        let id = desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(10), 0));

        let record = desk.resolve_ameba_move(id).unwrap();

        assert_eq!(record.energy_change, dec!(3));
        let eaten = record.food_consumed.unwrap();
        assert_eq!(eaten.position, Position::new(0, 1));
        assert_eq!(eaten.energy, dec!(4));
        assert_eq!(desk.ameba(id).unwrap().energy(), dec!(13));
        assert!(desk.foods().first().unwrap().is_deleted());

        assert_eq!(desk.cleanup(), 1);
        assert!(desk.foods().is_empty());
    }

    #[test]
    fn food_is_eaten_by_at_most_one_ameba_per_step() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 10);
        desk.insert_food(Food::new(dec!(5), Position::new(3, 3)));
        // One approaches from the left, one from above.
        let first = desk.insert_ameba(ameba_at(Position::new(3, 2), dec!(10), 0));
        let second = desk.insert_ameba(ameba_at(Position::new(2, 3), dec!(10), 1));

        let outcome = desk.step_all_amebas().unwrap();

        assert_eq!(outcome.food_generation.foods_consumed, 1);
        assert_eq!(desk.ameba(first).unwrap().energy(), dec!(14));
        assert_eq!(desk.ameba(second).unwrap().energy(), dec!(9));
        let eaters = outcome
            .movements
            .iter()
            .filter(|m| m.food_consumed.is_some())
            .count();
        assert_eq!(eaters, 1);
        assert!(desk.foods().is_empty());
    }

    #[test]
    fn invalid_direction_leaves_state_untouched() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 11);
        let id = desk.insert_ameba(ameba_at(Position::new(2, 2), dec!(10), 9));

        let err = desk.resolve_ameba_move(id).unwrap_err();

        assert_eq!(err, DeskError::InvalidDirection { code: 9 });
        let ameba = desk.ameba(id).unwrap();
        assert_eq!(ameba.position(), Position::new(2, 2));
        assert_eq!(ameba.energy(), dec!(10));
    }

    #[test]
    fn unknown_ameba_is_reported() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 12);
        let stray = AmebaId::new();

        assert_eq!(
            desk.resolve_ameba_move(stray).unwrap_err(),
            DeskError::AmebaNotFound(stray)
        );
    }

    #[test]
    fn tombstoned_food_is_invisible() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 13);
        let mut eaten = Food::new(dec!(4), Position::new(1, 1));
        eaten.mark_deleted();
        desk.insert_food(eaten);

        let window = desk.visible_window(Position::new(1, 1), &ameba_params(dec!(1)));

        assert_eq!(window.energy_at(2, 2), Decimal::ZERO);
        assert!(!desk.is_occupied(Position::new(1, 1)));
    }

    #[test]
    fn step_regenerates_after_consumption() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(30), dec!(5)), 14);
        desk.insert_food(Food::new(dec!(5), Position::new(0, 1)));
        let id = desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(20), 0));

        let outcome = desk.step_all_amebas().unwrap();

        // 20 - 1 + 5 = 24 on the ameba, no food left: 6 available, two foods.
        assert_eq!(desk.ameba(id).unwrap().energy(), dec!(24));
        assert_eq!(outcome.food_generation.foods_consumed, 1);
        assert_eq!(outcome.food_generation.foods_generated, 2);
        assert_eq!(desk.total_energy().unwrap(), dec!(34));
    }

    #[test]
    fn min_food_floor_tops_up() {
        let mut p = params(7, 7, dec!(0), dec!(5));
        p.min_food_count = 3;
        let mut desk = PlayDesk::new(p, 15);

        let report = desk.replenish_food().unwrap();

        assert_eq!(report.foods_generated, 3);
        assert_eq!(desk.live_foods().count(), 3);
    }

    #[test]
    fn snapshot_lists_only_live_entities() {
        let mut desk = PlayDesk::new(params(7, 7, dec!(0), dec!(1)), 16);
        desk.insert_food(Food::new(dec!(2), Position::new(1, 1)));
        let mut gone = Food::new(dec!(3), Position::new(2, 2));
        gone.mark_deleted();
        desk.insert_food(gone);
        desk.insert_ameba(ameba_at(Position::new(0, 0), dec!(10), 0));

        let snapshot = desk.snapshot();

        assert_eq!(snapshot.amebas.len(), 1);
        assert_eq!(snapshot.foods.len(), 1);
        assert_eq!(snapshot.board_size, BoardSize::new(7, 7));
        assert_eq!(desk.total_energy().unwrap(), dec!(12));
    }

    #[test]
    fn same_seed_same_placement() {
        let mut a = PlayDesk::new(params(20, 20, dec!(100), dec!(10)), 99);
        let mut b = PlayDesk::new(params(20, 20, dec!(100), dec!(10)), 99);

        a.generate_food().unwrap();
        b.generate_food().unwrap();

        let cells = |desk: &PlayDesk| desk.foods().iter().map(Food::position).collect::<Vec<_>>();
        assert_eq!(cells(&a), cells(&b));
    }
}
