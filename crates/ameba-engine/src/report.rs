//! JSON run reports.
//!
//! One [`RunReport`] per independent run, gathered into a [`Report`] and
//! written to `simulation.report_path` when that is set.

use std::path::Path;

use ameba_core::audit::EnergyAnomaly;
use ameba_core::runner::SimulationResult;
use ameba_types::{DeskSnapshot, SimulationStatistics, StepRecord};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineError;

/// A failed energy balance, as written to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyReport {
    /// The step that failed the check.
    pub step: u64,
    /// Total energy the balance predicted.
    pub expected: Decimal,
    /// Total energy measured.
    pub actual: Decimal,
}

impl From<&EnergyAnomaly> for AnomalyReport {
    fn from(anomaly: &EnergyAnomaly) -> Self {
        Self {
            step: anomaly.step,
            expected: anomaly.expected,
            actual: anomaly.actual,
        }
    }
}

/// The outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Zero-based run index.
    pub run: u32,
    /// Seed the run's desk was created with.
    pub seed: u64,
    /// Aggregate figures.
    pub statistics: SimulationStatistics,
    /// Live entities at the end.
    pub final_state: DeskSnapshot,
    /// Per-step records; empty unless recording was on.
    pub steps: Vec<StepRecord>,
    /// Energy audit failures.
    pub anomalies: Vec<AnomalyReport>,
    /// Why the run stopped early, if it did.
    pub halted: Option<String>,
}

impl RunReport {
    /// Build a report from a finished run.
    pub fn new(run: u32, seed: u64, result: SimulationResult) -> Self {
        Self {
            run,
            seed,
            statistics: result.statistics,
            final_state: result.final_state,
            steps: result.steps,
            anomalies: result.anomalies.iter().map(AnomalyReport::from).collect(),
            halted: result.halted.as_ref().map(ToString::to_string),
        }
    }
}

/// All runs of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Runs in index order.
    pub runs: Vec<RunReport>,
}

impl Report {
    /// Write the report as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] or [`EngineError::Json`].
    pub fn write_to(&self, path: &Path) -> Result<(), EngineError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
