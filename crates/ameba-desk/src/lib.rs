//! The play desk for the Ameba simulation.
//!
//! This crate models the physical side of the game: a toroidal grid of
//! cells holding stationary food and moving amebas, the window each ameba
//! sees, and the rules for moving, eating, and regenerating food.
//!
//! # Modules
//!
//! - [`entity`] -- [`Food`], [`Ameba`], and the capability traits
//!   [`EnergyItem`] and [`PositionItem`].
//! - [`error`] -- Error types for desk operations.
//! - [`params`] -- [`DeskParams`] and [`AmebaParams`].
//! - [`play_desk`] -- [`PlayDesk`]: placement, food economy, move
//!   resolution, and cleanup.
//! - [`policy`] -- The [`DecisionPolicy`] capability amebas consult.
//! - [`visibility`] -- [`VisibleWindow`] queries around a cell.

pub mod entity;
pub mod error;
pub mod params;
pub mod play_desk;
pub mod policy;
pub mod visibility;

// Re-export primary types at crate root.
pub use entity::{Ameba, DeskEntity, EnergyItem, Food, PositionItem};
pub use error::DeskError;
pub use params::{AmebaParams, DEFAULT_ATTEMPTS_PER_CELL, DeskParams};
pub use play_desk::{GenerationReport, PlayDesk, StepOutcome};
pub use policy::{DecisionPolicy, FixedPolicy};
pub use visibility::{VisibilityQuery, VisibleWindow, find_by_position};
