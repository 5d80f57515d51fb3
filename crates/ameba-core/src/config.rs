//! Configuration loading and typed config structures for the Ameba simulation.
//!
//! The canonical configuration lives in `ameba-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, and [`GameConfig::validate`],
//! which rejects values the desk cannot run with.
//!
//! Every field has a serde default, so an empty document is a valid
//! configuration.

use std::path::Path;

use ameba_desk::{AmebaParams, DeskParams};
use ameba_types::BoardSize;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Environment variable that replaces `simulation.seed` when set.
pub const SEED_ENV_VAR: &str = "AMEBA_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot be used.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `ameba-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Board and food economy.
    #[serde(default)]
    pub play_desk: PlayDeskConfig,

    /// Ameba visibility and energy.
    #[serde(default)]
    pub ameba: AmebaConfig,

    /// Which decision policy drives the amebas.
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Run parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `AMEBA_SEED`, when set, overrides `simulation.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if `AMEBA_SEED` is not an unsigned integer.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.simulation.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Check that the configuration describes a runnable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let desk = &self.play_desk;
        let ameba = &self.ameba;

        if desk.rows == 0 {
            return Err(invalid("play_desk.rows", "must be positive"));
        }
        if desk.columns == 0 {
            return Err(invalid("play_desk.columns", "must be positive"));
        }
        if desk.total_energy < Decimal::ZERO {
            return Err(invalid("play_desk.total_energy", "must not be negative"));
        }
        if desk.energy_per_food <= Decimal::ZERO {
            return Err(invalid("play_desk.energy_per_food", "must be positive"));
        }
        if ameba.visible_rows > desk.rows {
            return Err(invalid(
                "ameba.visible_rows",
                format!("{} exceeds board rows {}", ameba.visible_rows, desk.rows),
            ));
        }
        if ameba.visible_columns > desk.columns {
            return Err(invalid(
                "ameba.visible_columns",
                format!(
                    "{} exceeds board columns {}",
                    ameba.visible_columns, desk.columns
                ),
            ));
        }
        if ameba.initial_energy < Decimal::ZERO {
            return Err(invalid("ameba.initial_energy", "must not be negative"));
        }
        if ameba.lost_energy_per_move < Decimal::ZERO {
            return Err(invalid("ameba.lost_energy_per_move", "must not be negative"));
        }
        if self.policy.kind == PolicyKind::Scripted && self.policy.moves.is_empty() {
            return Err(invalid(
                "policy.moves",
                "scripted policy needs at least one move",
            ));
        }
        if self.simulation.runs == 0 {
            return Err(invalid("simulation.runs", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Board and food economy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayDeskConfig {
    /// Board rows.
    #[serde(default = "default_board_side")]
    pub rows: u32,

    /// Board columns.
    #[serde(default = "default_board_side")]
    pub columns: u32,

    /// Energy budget for food plus amebas.
    #[serde(default = "default_total_energy")]
    pub total_energy: Decimal,

    /// Energy of every generated food.
    #[serde(default = "default_energy_per_food")]
    pub energy_per_food: Decimal,

    /// Live food floor after regeneration (0 disables it).
    #[serde(default)]
    pub min_food_count: u32,

    /// Random placement cap (0 means 16 samples per cell).
    #[serde(default)]
    pub max_placement_attempts: u32,
}

impl PlayDeskConfig {
    /// The desk parameters this section describes.
    pub const fn desk_params(&self) -> DeskParams {
        DeskParams {
            board: BoardSize::new(self.rows, self.columns),
            total_energy: self.total_energy,
            energy_per_food: self.energy_per_food,
            min_food_count: self.min_food_count,
            max_placement_attempts: self.max_placement_attempts,
        }
    }
}

impl Default for PlayDeskConfig {
    fn default() -> Self {
        Self {
            rows: default_board_side(),
            columns: default_board_side(),
            total_energy: default_total_energy(),
            energy_per_food: default_energy_per_food(),
            min_food_count: 0,
            max_placement_attempts: 0,
        }
    }
}

/// Ameba configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AmebaConfig {
    /// Rows visible above and below.
    #[serde(default = "default_visible_radius")]
    pub visible_rows: u32,

    /// Columns visible left and right.
    #[serde(default = "default_visible_radius")]
    pub visible_columns: u32,

    /// Energy of the initial ameba.
    #[serde(default = "default_initial_energy")]
    pub initial_energy: Decimal,

    /// Energy spent on every move.
    #[serde(default = "default_lost_energy_per_move")]
    pub lost_energy_per_move: Decimal,
}

impl AmebaConfig {
    /// The ameba parameters this section describes.
    pub const fn ameba_params(&self) -> AmebaParams {
        AmebaParams {
            visible_rows: self.visible_rows,
            visible_columns: self.visible_columns,
            initial_energy: self.initial_energy,
            lost_energy_per_move: self.lost_energy_per_move,
        }
    }
}

impl Default for AmebaConfig {
    fn default() -> Self {
        Self {
            visible_rows: default_visible_radius(),
            visible_columns: default_visible_radius(),
            initial_energy: default_initial_energy(),
            lost_energy_per_move: default_lost_energy_per_move(),
        }
    }
}

/// The available decision policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Head for the nearest visible food.
    #[default]
    ClosestFood,
    /// Replay `policy.moves` cyclically.
    Scripted,
}

/// Decision policy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Which policy to build.
    #[serde(default)]
    pub kind: PolicyKind,

    /// Direction codes for the scripted policy. Codes outside `0..=3` are
    /// accepted here and rejected by the desk when played.
    #[serde(default)]
    pub moves: Vec<u8>,
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for food and ameba placement.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Steps per run.
    #[serde(default = "default_steps")]
    pub steps: u64,

    /// Keep a full record of every step.
    #[serde(default)]
    pub record_steps: bool,

    /// Independent runs executed concurrently by the engine binary.
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Write a JSON report here when set.
    #[serde(default)]
    pub report_path: Option<String>,
}

impl SimulationConfig {
    /// Override the seed from `AMEBA_SEED` when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the variable is not a `u64`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(SEED_ENV_VAR) {
            self.seed = val.trim().parse().map_err(|err| {
                invalid("simulation.seed", format!("{SEED_ENV_VAR}={val}: {err}"))
            })?;
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            steps: default_steps(),
            record_steps: false,
            runs: default_runs(),
            report_path: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_board_side() -> u32 {
    32
}

fn default_total_energy() -> Decimal {
    Decimal::new(10_000, 0)
}

fn default_energy_per_food() -> Decimal {
    Decimal::new(50, 0)
}

const fn default_visible_radius() -> u32 {
    5
}

fn default_initial_energy() -> Decimal {
    Decimal::new(100, 0)
}

const fn default_lost_energy_per_move() -> Decimal {
    Decimal::ONE
}

const fn default_seed() -> u64 {
    42
}

const fn default_steps() -> u64 {
    1000
}

const fn default_runs() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_owned()
}
