//! Dashboard session: configuration, run state machine and published data.
//!
//! The session is the only holder of run output. Producers never write it
//! directly; they hand [`RunEvent`]s to whoever owns the session, who applies
//! them with the [`RunTicket`] obtained from [`Session::try_start`].
//!
//! ```text
//!            try_start(Convergence)              Finished
//!   Idle ──────────────────────────▶ RunningConvergence ──────┐
//!     │                                                       ▼
//!     │      try_start(Dissociation)             Finished    Done
//!     └─────────────────────────────▶ RunningDissociation ────┘ │
//!                                                               │
//!            Done accepts either try_start again ◀──────────────┘
//! ```
//!
//! Tickets are minted only by a successful `try_start`, which refuses while a
//! run is active, so at most one producer can publish at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::MoleculeConfig;
use crate::error::{Result, VqeError};
use crate::event::{RunEvent, RunKind};
use crate::model::{ConvergencePoint, DissociationPoint, VqeResult};

/// Unique identifier of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of the run guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "run_id", rename_all = "snake_case")]
pub enum RunState {
    /// No run has been started yet.
    #[default]
    Idle,
    /// The convergence simulator is producing.
    RunningConvergence(RunId),
    /// The dissociation generator is producing.
    RunningDissociation(RunId),
    /// The last run finished; results are final.
    Done,
}

impl RunState {
    /// Check if a run is in flight.
    pub fn is_running(&self) -> bool {
        self.active().is_some()
    }

    /// Kind and ID of the active run.
    pub fn active(&self) -> Option<(RunKind, RunId)> {
        match *self {
            RunState::RunningConvergence(id) => Some((RunKind::Convergence, id)),
            RunState::RunningDissociation(id) => Some((RunKind::Dissociation, id)),
            RunState::Idle | RunState::Done => None,
        }
    }

    /// Get the state name.
    pub fn name(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::RunningConvergence(_) => "running_convergence",
            RunState::RunningDissociation(_) => "running_dissociation",
            RunState::Done => "done",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Permission to publish into the session for one run.
///
/// Not `Clone`: whoever holds the ticket is the run's only producer.
#[derive(Debug, PartialEq, Eq)]
pub struct RunTicket {
    id: RunId,
    kind: RunKind,
}

impl RunTicket {
    /// ID of the run.
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Kind of the run.
    pub fn kind(&self) -> RunKind {
        self.kind
    }
}

/// Bookkeeping of the most recent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Run ID.
    pub id: RunId,
    /// Run kind.
    pub kind: RunKind,
    /// When the run was started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: Option<DateTime<Utc>>,
}

/// In-memory state rendered by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: MoleculeConfig,
    state: RunState,
    progress: f64,
    convergence: Vec<ConvergencePoint>,
    result: Option<VqeResult>,
    result_config: Option<MoleculeConfig>,
    dissociation: Vec<DissociationPoint>,
    last_run: Option<RunRecord>,
}

impl Session {
    /// Create a session with the given configuration.
    pub fn new(config: MoleculeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &MoleculeConfig {
        &self.config
    }

    /// Replace the configuration. Refused while a run is active.
    pub fn update_config(&mut self, config: MoleculeConfig) -> Result<()> {
        if let Some((kind, _)) = self.state.active() {
            return Err(VqeError::ConfigLocked(kind));
        }
        self.config = config;
        Ok(())
    }

    /// Current state of the run guard.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Progress of the active or last run (0–100).
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Convergence points received so far in the current convergence run.
    pub fn convergence(&self) -> &[ConvergencePoint] {
        &self.convergence
    }

    /// Latest published result.
    pub fn result(&self) -> Option<&VqeResult> {
        self.result.as_ref()
    }

    /// Configuration the latest result was produced with.
    ///
    /// Equal to [`Session::config`] until a convergence run starts; stays
    /// with the result when the configuration is edited afterwards.
    pub fn result_config(&self) -> &MoleculeConfig {
        self.result_config.as_ref().unwrap_or(&self.config)
    }

    /// Completed dissociation curve (empty until a dissociation run finishes).
    pub fn dissociation(&self) -> &[DissociationPoint] {
        &self.dissociation
    }

    /// Most recent run, active or finished.
    pub fn last_run(&self) -> Option<&RunRecord> {
        self.last_run.as_ref()
    }

    /// Start a run of the given kind.
    ///
    /// Clears the data the run is about to regenerate and returns the ticket
    /// its producer must present when publishing.
    pub fn try_start(&mut self, kind: RunKind) -> Result<RunTicket> {
        if let Some((active, _)) = self.state.active() {
            warn!("Rejected {} run: {} run in progress", kind, active);
            return Err(VqeError::RunInProgress {
                requested: kind,
                active,
            });
        }

        let id = RunId::new();
        self.state = match kind {
            RunKind::Convergence => {
                self.convergence.clear();
                self.result = None;
                self.result_config = Some(self.config.clone());
                RunState::RunningConvergence(id)
            }
            RunKind::Dissociation => {
                self.dissociation.clear();
                RunState::RunningDissociation(id)
            }
        };
        self.progress = 0.0;
        self.last_run = Some(RunRecord {
            id,
            kind,
            started_at: Utc::now(),
            finished_at: None,
        });

        info!("Started {} run {}", kind, id);
        Ok(RunTicket { id, kind })
    }

    /// Apply an event produced by the ticket's run.
    pub fn apply(&mut self, ticket: &RunTicket, event: RunEvent) -> Result<()> {
        self.check_ticket(ticket)?;

        match event {
            RunEvent::Progress(progress) => self.progress = progress,
            RunEvent::Point(point) => self.convergence.push(point),
            RunEvent::Snapshot(result) => {
                debug!(
                    "Run {}: snapshot at {} points, E = {:.6} Ha",
                    ticket.id,
                    result.num_points(),
                    result.energy
                );
                self.result = Some(result);
            }
            RunEvent::Curve(curve) => self.dissociation = curve,
            RunEvent::Finished => self.complete(ticket),
        }
        Ok(())
    }

    /// End the ticket's run, keeping whatever it published.
    pub fn finish(&mut self, ticket: &RunTicket) -> Result<()> {
        self.check_ticket(ticket)?;
        self.complete(ticket);
        Ok(())
    }

    fn complete(&mut self, ticket: &RunTicket) {
        self.state = RunState::Done;
        if let Some(record) = self.last_run.as_mut() {
            record.finished_at = Some(Utc::now());
        }
        info!("Finished {} run {}", ticket.kind, ticket.id);
    }

    fn check_ticket(&self, ticket: &RunTicket) -> Result<()> {
        match self.state.active() {
            Some((_, id)) if id == ticket.id => Ok(()),
            _ => Err(VqeError::StaleTicket {
                ticket: ticket.id.to_string(),
                state: self.state,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Molecule;
    use crate::convergence::ConvergenceSimulator;
    use crate::jitter::NoJitter;

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.state(), RunState::Idle);
        assert!(session.result().is_none());
        assert!(session.dissociation().is_empty());
        assert!(session.last_run().is_none());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = Session::default();
        let _ticket = session.try_start(RunKind::Convergence).unwrap();

        let err = session.try_start(RunKind::Dissociation).unwrap_err();
        assert!(matches!(
            err,
            VqeError::RunInProgress {
                requested: RunKind::Dissociation,
                active: RunKind::Convergence
            }
        ));
        let err = session.try_start(RunKind::Convergence).unwrap_err();
        assert!(matches!(err, VqeError::RunInProgress { .. }));
    }

    #[test]
    fn test_done_allows_new_run() {
        let mut session = Session::default();
        let ticket = session.try_start(RunKind::Dissociation).unwrap();
        session.apply(&ticket, RunEvent::Finished).unwrap();
        assert_eq!(session.state(), RunState::Done);
        assert!(session.last_run().unwrap().finished_at.is_some());

        let ticket = session.try_start(RunKind::Convergence).unwrap();
        assert_eq!(session.state(), RunState::RunningConvergence(ticket.id()));
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut session = Session::default();
        let old = session.try_start(RunKind::Convergence).unwrap();
        session.finish(&old).unwrap();
        let _new = session.try_start(RunKind::Convergence).unwrap();

        let err = session.apply(&old, RunEvent::Progress(50.0)).unwrap_err();
        assert!(matches!(err, VqeError::StaleTicket { .. }));
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_config_locked_while_running() {
        let mut session = Session::default();
        let lih = MoleculeConfig::for_molecule(Molecule::LiH);
        let ticket = session.try_start(RunKind::Convergence).unwrap();

        assert!(matches!(
            session.update_config(lih.clone()),
            Err(VqeError::ConfigLocked(RunKind::Convergence))
        ));

        session.finish(&ticket).unwrap();
        session.update_config(lih).unwrap();
        assert_eq!(session.config().molecule, Molecule::LiH);
    }

    #[test]
    fn test_convergence_run_resets_trace() {
        let mut session = Session::default();
        let config = session.config().clone();

        for _ in 0..2 {
            let ticket = session.try_start(RunKind::Convergence).unwrap();
            assert!(session.convergence().is_empty());
            assert!(session.result().is_none());

            let mut last_len = 0;
            for step in ConvergenceSimulator::new(&config, NoJitter) {
                session.apply(&ticket, RunEvent::Point(step.point)).unwrap();
                assert!(session.convergence().len() > last_len);
                last_len = session.convergence().len();
                if let Some(snapshot) = step.snapshot {
                    session.apply(&ticket, RunEvent::Snapshot(snapshot)).unwrap();
                }
            }
            session.apply(&ticket, RunEvent::Finished).unwrap();
            assert_eq!(session.convergence().len(), 51);
            assert_eq!(session.result().unwrap().diagnostics.evaluations, 51);
        }
    }

    #[test]
    fn test_dissociation_run_keeps_convergence_result() {
        let mut session = Session::default();
        let ticket = session.try_start(RunKind::Convergence).unwrap();
        let step = ConvergenceSimulator::new(session.config(), NoJitter)
            .next()
            .unwrap();
        session
            .apply(&ticket, RunEvent::Snapshot(step.snapshot.unwrap()))
            .unwrap();
        session.finish(&ticket).unwrap();

        let ticket = session.try_start(RunKind::Dissociation).unwrap();
        assert!(session.result().is_some());
        session.finish(&ticket).unwrap();
    }

    #[test]
    fn test_result_keeps_its_config() {
        let mut session = Session::default();
        let ticket = session.try_start(RunKind::Convergence).unwrap();
        let step = ConvergenceSimulator::new(session.config(), NoJitter)
            .next()
            .unwrap();
        session
            .apply(&ticket, RunEvent::Snapshot(step.snapshot.unwrap()))
            .unwrap();
        session.finish(&ticket).unwrap();

        session
            .update_config(MoleculeConfig::for_molecule(Molecule::LiH).with_bond_length(1.6))
            .unwrap();
        assert_eq!(session.config().molecule, Molecule::LiH);
        assert_eq!(session.result_config().molecule, Molecule::H2);
        assert_eq!(session.result_config().bond_length, 0.74);

        // The next convergence run adopts the edited configuration
        let _ticket = session.try_start(RunKind::Convergence).unwrap();
        assert_eq!(session.result_config().molecule, Molecule::LiH);
    }

    #[test]
    fn test_run_state_serialization() {
        let json = serde_json::to_value(RunState::Idle).unwrap();
        assert_eq!(json["state"], "idle");

        let id = RunId::new();
        let json = serde_json::to_value(RunState::RunningConvergence(id)).unwrap();
        assert_eq!(json["state"], "running_convergence");
        assert_eq!(json["run_id"], id.to_string());
    }
}
