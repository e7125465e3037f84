//! Events emitted by running generators.

use serde::{Deserialize, Serialize};

use crate::model::{ConvergencePoint, DissociationPoint, VqeResult};

/// Which generator a run drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    /// Convergence simulator.
    Convergence,
    /// Dissociation curve generator.
    Dissociation,
}

impl RunKind {
    /// Lower-case name used in logs and URLs.
    pub fn name(&self) -> &'static str {
        match self {
            RunKind::Convergence => "convergence",
            RunKind::Dissociation => "dissociation",
        }
    }
}

impl std::fmt::Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of a paced run, in the order it is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Progress indicator moved (0–100).
    Progress(f64),
    /// A convergence point was computed.
    Point(ConvergencePoint),
    /// A full convergence result was published.
    Snapshot(VqeResult),
    /// The dissociation curve is complete.
    Curve(Vec<DissociationPoint>),
    /// The run produced its last event.
    Finished,
}

impl RunEvent {
    /// Whether this event ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunEvent::Finished)
    }
}
