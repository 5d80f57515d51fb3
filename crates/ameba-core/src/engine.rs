//! The engine facade hosts drive.
//!
//! An [`Engine`] starts empty. [`Engine::initialize`] validates a
//! [`GameConfig`] and builds the desk and policy, and
//! [`Engine::place_initial_ameba`] puts the one ameba on it. Only then do
//! [`Engine::run_steps`] and [`Engine::snapshot`] do anything. Before that
//! they answer [`EngineOutcome::NotInitialized`], which is a normal outcome
//! and not an error.
//!
//! All mutation goes through `&mut self`, so one engine runs one step at a
//! time. A host sharing an engine between threads puts it behind a mutex.

use std::sync::Arc;

use ameba_desk::{AmebaParams, DecisionPolicy, DeskError, PlayDesk};
use ameba_types::{AmebaId, DeskSnapshot};
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::decision::build_policy;
use crate::runner::{self, SimulationResult};

/// The result of an engine operation that needs an initialized engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome<T> {
    /// The operation ran.
    Ready(T),
    /// [`Engine::initialize`] has not been called yet.
    NotInitialized,
}

impl<T> EngineOutcome<T> {
    /// The value, if the engine was initialized.
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NotInitialized => None,
        }
    }

    /// Whether the engine was initialized.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Everything an initialized engine holds.
struct Session {
    desk: PlayDesk,
    ameba: AmebaParams,
    policy: Arc<dyn DecisionPolicy>,
    initial_ameba: Option<AmebaId>,
    steps_run: u64,
}

/// The simulation engine.
#[derive(Debug, Default)]
pub struct Engine {
    session: Option<Session>,
}

impl Engine {
    /// Create an uninitialized engine.
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Whether [`initialize`](Self::initialize) has succeeded.
    pub const fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Validate `config` and build a fresh desk seeded with
    /// `simulation.seed`. Any previous desk is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails
    /// validation; the engine keeps its previous state.
    pub fn initialize(&mut self, config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let desk_params = config.play_desk.desk_params();
        let policy = build_policy(&config.policy);
        info!(
            rows = desk_params.board.rows,
            columns = desk_params.board.columns,
            total_energy = %desk_params.total_energy,
            seed = config.simulation.seed,
            policy = policy.name(),
            "Engine initialized"
        );

        self.session = Some(Session {
            desk: PlayDesk::new(desk_params, config.simulation.seed),
            ameba: config.ameba.ameba_params(),
            policy,
            initial_ameba: None,
            steps_run: 0,
        });
        Ok(())
    }

    /// Place an ameba with the configured initial energy at a random empty
    /// cell, then fill the board with food up to the energy budget.
    ///
    /// The ameba is placed once per initialization. Later calls return its
    /// ID and leave the desk alone.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoAvailablePlacement`] if the board has no room.
    pub fn place_initial_ameba(&mut self) -> Result<EngineOutcome<AmebaId>, DeskError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(EngineOutcome::NotInitialized);
        };
        if let Some(id) = session.initial_ameba {
            debug!(ameba_id = %id, "Initial ameba already placed");
            return Ok(EngineOutcome::Ready(id));
        }

        let id = session
            .desk
            .place_ameba(session.ameba, Arc::clone(&session.policy))?;
        let report = session.desk.replenish_food()?;
        info!(
            ameba_id = %id,
            foods_generated = report.foods_generated,
            energy_added = %report.energy_added,
            "Initial ameba placed"
        );
        session.initial_ameba = Some(id);
        Ok(EngineOutcome::Ready(id))
    }

    /// Run `count` steps. Step numbers continue from earlier calls.
    ///
    /// A failing step does not make this return early with an error: the
    /// result carries the partial run and the error in `halted`.
    pub fn run_steps(&mut self, count: u64, record_steps: bool) -> EngineOutcome<SimulationResult> {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|session| session.initial_ameba.is_some())
        else {
            return EngineOutcome::NotInitialized;
        };

        let result = runner::run_steps(&mut session.desk, session.steps_run, count, record_steps);
        session.steps_run = session
            .steps_run
            .saturating_add(result.statistics.steps_completed);
        EngineOutcome::Ready(result)
    }

    /// The live contents of the desk once the initial ameba is placed.
    pub fn snapshot(&self) -> EngineOutcome<DeskSnapshot> {
        self.session
            .as_ref()
            .filter(|session| session.initial_ameba.is_some())
            .map_or(EngineOutcome::NotInitialized, |session| {
                EngineOutcome::Ready(session.desk.snapshot())
            })
    }

    /// The desk, for hosts that need direct access.
    pub fn desk(&self) -> Option<&PlayDesk> {
        self.session.as_ref().map(|session| &session.desk)
    }

    /// The desk, mutably.
    pub fn desk_mut(&mut self) -> Option<&mut PlayDesk> {
        self.session.as_mut().map(|session| &mut session.desk)
    }

    /// Steps completed since initialization.
    pub fn steps_run(&self) -> u64 {
        self.session.as_ref().map_or(0, |session| session.steps_run)
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("desk", &self.desk)
            .field("ameba", &self.ameba)
            .field("policy", &self.policy.name())
            .field("initial_ameba", &self.initial_ameba)
            .field("steps_run", &self.steps_run)
            .finish()
    }
}
