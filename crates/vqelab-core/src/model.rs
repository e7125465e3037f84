//! Result types rendered by the dashboard and written by export.

use serde::{Deserialize, Serialize};

use crate::config::MoleculeConfig;
use crate::tables::{BackendMode, CircuitResources};

/// One energy estimate of the convergence trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    /// Iteration index (0-based).
    pub iteration: u32,
    /// Energy estimate (Ha).
    pub energy: f64,
}

/// Run diagnostics shown next to the convergence plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Qubit count.
    pub qubits: u32,
    /// Hamiltonian term count.
    pub pauli_terms: u32,
    /// Ansatz circuit depth.
    pub circuit_depth: u32,
    /// Energy evaluations so far.
    pub evaluations: u32,
    /// Shots consumed so far (0 on an exact statevector backend).
    pub total_shots: u64,
    /// Absolute deviation from the reference energy (mHa).
    pub error: f64,
}

impl Diagnostics {
    /// Build diagnostics for the state of a run after `evaluations` evaluations.
    ///
    /// `error` is derived from `energy` here and nowhere else.
    pub fn compute(config: &MoleculeConfig, energy: f64, evaluations: u32) -> Self {
        let resources = CircuitResources::for_config(config);
        let reference = config.molecule.reference_energy();
        Self {
            qubits: resources.qubits,
            pauli_terms: resources.pauli_terms,
            circuit_depth: resources.circuit_depth,
            evaluations,
            total_shots: BackendMode::from_label(&config.backend)
                .total_shots(config.shots, evaluations),
            error: (energy - reference).abs() * 1000.0,
        }
    }
}

/// A published VQE result. Snapshots replace each other wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VqeResult {
    /// Latest energy estimate (Ha).
    pub energy: f64,
    /// Convergence trace up to and including `energy`.
    pub convergence: Vec<ConvergencePoint>,
    /// Diagnostics for `energy`.
    pub diagnostics: Diagnostics,
}

impl VqeResult {
    /// Number of points in the trace.
    pub fn num_points(&self) -> usize {
        self.convergence.len()
    }
}

/// One point of the dissociation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DissociationPoint {
    /// Bond length (Å).
    pub r: f64,
    /// Energy (Ha).
    pub energy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Molecule;

    #[test]
    fn test_diagnostics_exact_backend_has_no_shots() {
        let config = MoleculeConfig::default();
        let diagnostics = Diagnostics::compute(&config, -1.13727, 6);
        assert_eq!(diagnostics.total_shots, 0);
        assert_eq!(diagnostics.evaluations, 6);
        assert_eq!(diagnostics.error, 0.0);
    }

    #[test]
    fn test_diagnostics_sampled_backend_counts_shots() {
        let config = MoleculeConfig::for_molecule(Molecule::LiH)
            .with_backend("qasm_simulator")
            .with_shots(2000);
        let diagnostics = Diagnostics::compute(&config, -7.8763, 11);
        assert_eq!(diagnostics.total_shots, 22_000);
        assert!((diagnostics.error - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagnostics_json_is_camel_case() {
        let diagnostics = Diagnostics::compute(&MoleculeConfig::default(), -1.0, 1);
        let json = serde_json::to_value(diagnostics).unwrap();
        assert!(json.get("pauliTerms").is_some());
        assert!(json.get("circuitDepth").is_some());
        assert!(json.get("totalShots").is_some());
    }
}
