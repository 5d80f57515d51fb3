//! End-to-end tests for the engine facade.
//!
//! These drive the public API only: build a config, initialize an engine,
//! place the ameba, run steps, and inspect the result.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use ameba_core::config::GameConfig;
use ameba_core::engine::Engine;
use ameba_core::runner::SimulationResult;
use ameba_core::step::StepError;
use ameba_desk::{Ameba, AmebaParams, DeskError, DeskParams, FixedPolicy, Food, PlayDesk};
use ameba_types::{BoardSize, Position};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn config(policy: &str, seed: u64) -> GameConfig {
    let yaml = format!(
        "play_desk: {{ rows: 12, columns: 12, total_energy: 1000, energy_per_food: 25 }}\n\
         ameba: {{ visible_rows: 3, visible_columns: 3, initial_energy: 100, lost_energy_per_move: 1 }}\n\
         policy: {policy}\n\
         simulation: {{ seed: {seed} }}"
    );
    GameConfig::parse(&yaml).unwrap()
}

fn run(config: &GameConfig, steps: u64, record: bool) -> SimulationResult {
    let mut engine = Engine::new();
    engine.initialize(config).unwrap();
    engine.place_initial_ameba().unwrap();
    let outcome = engine.run_steps(steps, record);
    assert!(outcome.is_ready());
    outcome.ready().unwrap()
}

#[test]
fn same_seed_and_script_replay_identically() {
    let config = config("{ kind: scripted, moves: [0, 1, 1, 2, 3, 0] }", 17);

    let first = run(&config, 200, false);
    let second = run(&config, 200, false);

    assert!(first.is_complete());
    assert_eq!(first.final_state, second.final_state);
    assert_eq!(first.statistics, second.statistics);
}

#[test]
fn closest_food_run_keeps_energy_balanced() {
    let config = config("{ kind: closest_food }", 3);

    let result = run(&config, 500, true);

    assert!(result.is_complete());
    assert!(result.anomalies.is_empty());
    assert_eq!(result.statistics.steps_completed, 500);
    assert_eq!(result.steps.len(), 500);
    assert!(result.statistics.total_foods_consumed > 0);
}

#[test]
fn every_move_costs_exactly_the_move_price() {
    let config = config("{ kind: closest_food }", 8);

    let result = run(&config, 100, true);

    for record in &result.steps {
        for movement in &record.movements {
            let eaten = movement
                .food_consumed
                .as_ref()
                .map_or(Decimal::ZERO, |food| food.energy);
            assert_eq!(movement.energy_change, eaten.checked_sub(dec!(1)).unwrap());
        }
    }
}

#[test]
fn budget_is_never_exceeded_by_more_than_one_food() {
    let config = config("{ kind: closest_food }", 21);

    let result = run(&config, 300, true);

    for record in &result.steps {
        assert!(record.total_energy < dec!(1025));
        let live: Decimal = record
            .game_state
            .foods
            .iter()
            .chain(record.game_state.amebas.iter())
            .map(|entity| entity.energy)
            .sum();
        assert_eq!(live, record.total_energy);
    }
}

#[test]
fn invalid_direction_returns_partial_result() {
    let config = config("{ kind: scripted, moves: [0, 0, 5] }", 4);

    let result = run(&config, 10, true);

    assert_eq!(result.statistics.steps_completed, 2);
    assert_eq!(result.steps.len(), 2);
    assert_eq!(
        result.halted,
        Some(StepError::Desk {
            step: 3,
            source: DeskError::InvalidDirection { code: 5 },
        })
    );
    assert_eq!(result.final_state.amebas.len(), 1);
}

#[test]
fn window_scenario_through_the_desk() {
    let mut desk = PlayDesk::new(
        DeskParams {
            board: BoardSize::new(7, 7),
            total_energy: Decimal::ZERO,
            energy_per_food: dec!(1),
            min_food_count: 0,
            max_placement_attempts: 0,
        },
        0,
    );
    for (energy, row, column) in [(1, 1, 1), (2, 3, 3), (3, 2, 6), (4, 6, 0)] {
        desk.insert_food(Food::new(Decimal::from(energy), Position::new(row, column)));
    }
    let params = AmebaParams {
        visible_rows: 2,
        visible_columns: 2,
        initial_energy: dec!(10),
        lost_energy_per_move: dec!(1),
    };
    desk.insert_ameba(Ameba::new(
        params,
        Position::new(0, 1),
        dec!(10),
        Arc::new(FixedPolicy(0)),
    ));

    let window = desk.visible_window(Position::new(0, 1), &params);

    let expected: Vec<Vec<Decimal>> = [
        [0, 0, 0, 0, 0],
        [0, 4, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [3, 0, 0, 0, 0],
    ]
    .iter()
    .map(|row| row.iter().copied().map(Decimal::from).collect())
    .collect();
    assert_eq!(window.energy_grid(), expected);
}
