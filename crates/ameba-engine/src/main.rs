//! Engine binary for the Ameba simulation.
//!
//! This is the main entry point that wires together configuration,
//! logging, and the engine facade. It runs `simulation.runs` independent
//! simulations concurrently, each on its own desk, and optionally writes a
//! JSON report.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ameba-config.yaml` (or `AMEBA_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Spawn one blocking task per run, seeded with `seed + run index`
//! 4. Collect and log the results
//! 5. Write the report if `simulation.report_path` is set

mod error;
mod report;

use std::path::{Path, PathBuf};

use ameba_core::config::{GameConfig, LoggingConfig};
use ameba_core::engine::{Engine, EngineOutcome};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report::{Report, RunReport};

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "ameba-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_ENV_VAR: &str = "AMEBA_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, a run task, or the report fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;
    config.validate().map_err(EngineError::from)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("ameba-engine starting");
    info!(
        rows = config.play_desk.rows,
        columns = config.play_desk.columns,
        seed = config.simulation.seed,
        steps = config.simulation.steps,
        runs = config.simulation.runs,
        policy = ?config.policy.kind,
        "Configuration loaded"
    );

    // 3. Spawn the runs.
    let mut handles = Vec::new();
    for run in 0..config.simulation.runs {
        let run_config = config.clone();
        handles.push((
            run,
            tokio::task::spawn_blocking(move || run_simulation(&run_config, run)),
        ));
    }

    // 4. Collect results in run order.
    let mut report = Report::default();
    for (run, handle) in handles {
        let run_report = handle.await.map_err(|e| EngineError::Join {
            message: format!("run {run}: {e}"),
        })??;
        log_run(&run_report);
        report.runs.push(run_report);
    }

    // 5. Write the report.
    if let Some(path) = config.simulation.report_path.as_deref() {
        report.write_to(Path::new(path))?;
        info!(path, runs = report.runs.len(), "Report written");
    }

    info!("ameba-engine shutdown complete");
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `logging.level`.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load the game configuration.
///
/// Reads the file named by `AMEBA_CONFIG` if set, otherwise
/// `ameba-config.yaml` in the working directory. A missing default file
/// falls back to built-in defaults; a missing explicit file is an error.
fn load_config() -> Result<GameConfig, EngineError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(GameConfig::from_file(&PathBuf::from(path))?);
    }

    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        Ok(GameConfig::from_file(config_path)?)
    } else {
        let mut config = GameConfig::default();
        config.simulation.apply_env_overrides()?;
        Ok(config)
    }
}

/// The seed for run `run`: the configured seed offset by the run index.
fn run_seed(base: u64, run: u32) -> u64 {
    base.wrapping_add(u64::from(run))
}

/// Execute one complete run on its own engine.
fn run_simulation(config: &GameConfig, run: u32) -> Result<RunReport, EngineError> {
    let seed = run_seed(config.simulation.seed, run);
    let mut run_config = config.clone();
    run_config.simulation.seed = seed;

    let mut engine = Engine::new();
    engine.initialize(&run_config)?;
    if !engine.place_initial_ameba()?.is_ready() {
        return Err(EngineError::NotInitialized { run });
    }

    match engine.run_steps(run_config.simulation.steps, run_config.simulation.record_steps) {
        EngineOutcome::Ready(result) => Ok(RunReport::new(run, seed, result)),
        EngineOutcome::NotInitialized => Err(EngineError::NotInitialized { run }),
    }
}

/// Log the outcome of one run.
fn log_run(report: &RunReport) {
    let stats = &report.statistics;
    if !report.anomalies.is_empty() {
        warn!(
            run = report.run,
            anomalies = report.anomalies.len(),
            "Run had energy audit anomalies"
        );
    }
    if let Some(reason) = &report.halted {
        error!(
            run = report.run,
            seed = report.seed,
            steps_completed = stats.steps_completed,
            reason = %reason,
            "Run halted"
        );
        return;
    }
    info!(
        run = report.run,
        seed = report.seed,
        steps_completed = stats.steps_completed,
        final_food_count = stats.final_food_count,
        total_energy = %stats.total_energy,
        foods_consumed = stats.total_foods_consumed,
        foods_generated = stats.total_foods_generated,
        "Run finished"
    );
}
