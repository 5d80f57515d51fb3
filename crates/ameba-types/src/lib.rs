//! Shared type definitions for the Ameba play-desk simulation.
//!
//! This crate is the single source of truth for data that crosses crate
//! boundaries: grid coordinates, directions, identifiers, and the snapshot
//! and record structs handed to hosts. Types flow to `TypeScript` via
//! `ts-rs` for the front end that renders recorded runs.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for amebas and foods
//! - [`enums`] -- [`Direction`] codes and [`EntityKind`]
//! - [`grid`] -- Toroidal [`Position`] arithmetic and [`BoardSize`]
//! - [`structs`] -- Snapshots, movement records, step records, statistics

pub mod enums;
pub mod grid;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Direction, EntityKind};
pub use grid::{BoardSize, Position};
pub use ids::{AmebaId, FoodId};
pub use structs::{
    ConsumedFood, DeskSnapshot, EntitySnapshot, FoodGeneration, MovementRecord,
    SimulationStatistics, StepRecord,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::AmebaId::export_all();
        let _ = crate::ids::FoodId::export_all();

        // Enums
        let _ = crate::enums::Direction::export_all();
        let _ = crate::enums::EntityKind::export_all();

        // Grid
        let _ = crate::grid::BoardSize::export_all();
        let _ = crate::grid::Position::export_all();

        // Structs
        let _ = crate::structs::EntitySnapshot::export_all();
        let _ = crate::structs::DeskSnapshot::export_all();
        let _ = crate::structs::ConsumedFood::export_all();
        let _ = crate::structs::MovementRecord::export_all();
        let _ = crate::structs::FoodGeneration::export_all();
        let _ = crate::structs::StepRecord::export_all();
        let _ = crate::structs::SimulationStatistics::export_all();
    }
}
