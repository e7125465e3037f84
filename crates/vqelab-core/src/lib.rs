//! VQE Lab core: the data behind the VQE demonstration dashboard.
//!
//! Nothing in this crate runs a quantum simulation. Energies come from
//! closed-form noise and Morse-potential formulas around tabulated reference
//! values, which is enough to drive a convincing dashboard:
//!
//! - **Convergence**: an iteration-indexed energy trace that decays onto the
//!   molecule's reference energy, with a snapshot every 5 iterations
//! - **Dissociation**: an H₂-shaped Morse curve over 15 bond lengths
//! - **Metrics**: Hartree-Fock / exact comparisons, unit conversions and the
//!   chemical-accuracy check
//! - **Export**: a single JSON document with configuration, result and curve
//!
//! # Quick Start
//!
//! ```rust
//! use vqelab_core::{ConvergenceSimulator, MoleculeConfig, NoJitter};
//!
//! let config = MoleculeConfig::default();
//! let steps: Vec<_> = ConvergenceSimulator::new(&config, NoJitter).collect();
//!
//! assert_eq!(steps.len(), 51);
//! assert_eq!(steps.iter().filter(|s| s.snapshot.is_some()).count(), 11);
//! ```
//!
//! The [`runner`] module paces the same generators on a tokio timer and
//! publishes [`RunEvent`]s over a channel; [`Session`] holds the state the
//! dashboard renders.

pub mod config;
pub mod convergence;
pub mod dissociation;
pub mod error;
pub mod event;
pub mod export;
pub mod jitter;
pub mod metrics;
pub mod model;
pub mod runner;
pub mod session;
pub mod tables;

pub use config::{Molecule, MoleculeConfig};
pub use convergence::{ConvergenceSimulator, ConvergenceStep, ITERATION_BUDGET, SNAPSHOT_INTERVAL};
pub use dissociation::{BOND_LENGTHS, DissociationGenerator, DissociationStep, morse_energy};
pub use error::{Result, VqeError};
pub use event::{RunEvent, RunKind};
pub use export::{ExportArtifact, ExportConfig, ExportDocument};
pub use jitter::{Jitter, NoJitter, SeededJitter};
pub use metrics::{ComparisonRow, ReferenceEnergies};
pub use model::{ConvergencePoint, Diagnostics, DissociationPoint, VqeResult};
pub use runner::Pacing;
pub use session::{RunId, RunState, RunTicket, Session};
