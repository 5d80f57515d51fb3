//! Configuration, decision policies, and the step cycle for the Ameba
//! simulation.
//!
//! This crate sits on top of `ameba-desk` and turns a play desk into a
//! runnable game: it loads the configuration, builds the policy that moves
//! the amebas, drives steps, audits energy, and exposes the [`Engine`]
//! facade a host calls.
//!
//! # Modules
//!
//! - [`audit`] -- Per-step energy conservation check.
//! - [`config`] -- Configuration loading from `ameba-config.yaml` into
//!   strongly-typed structs.
//! - [`decision`] -- [`ClosestFoodPolicy`] and [`ScriptedPolicy`].
//! - [`engine`] -- The [`Engine`] facade and [`EngineOutcome`].
//! - [`runner`] -- Multi-step runs with records and statistics.
//! - [`step`] -- One audited step.
//!
//! [`ClosestFoodPolicy`]: decision::ClosestFoodPolicy
//! [`ScriptedPolicy`]: decision::ScriptedPolicy
//! [`Engine`]: engine::Engine
//! [`EngineOutcome`]: engine::EngineOutcome

pub mod audit;
pub mod config;
pub mod decision;
pub mod engine;
pub mod runner;
pub mod step;
