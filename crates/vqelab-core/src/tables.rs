//! Reference constants and lookup tables.
//!
//! Every number the generators and the comparison panel use lives here, keyed
//! by [`Molecule`], [`Ansatz`] or [`BackendMode`], so the formulas elsewhere
//! stay free of scattered conditionals.

use serde::{Deserialize, Serialize};

use crate::config::{Molecule, MoleculeConfig};

/// Hartree to electronvolt conversion factor.
pub const HARTREE_TO_EV: f64 = 27.2114;

/// Chemical accuracy threshold in milli-Hartree (≈ 1 kcal/mol).
pub const CHEMICAL_ACCURACY_MHA: f64 = 1.6;

/// Row of the per-molecule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoleculeTable {
    /// Convergence target of the simulated VQE run (Ha).
    pub reference_energy: f64,
    /// Hartree-Fock energy (Ha).
    pub hartree_fock_energy: f64,
    /// Full configuration-interaction energy (Ha).
    pub exact_energy: f64,
    /// Qubits after Jordan-Wigner mapping in a minimal basis.
    pub qubits: u32,
    /// Pauli strings in the qubit Hamiltonian.
    pub pauli_terms: u32,
}

const H2_TABLE: MoleculeTable = MoleculeTable {
    reference_energy: -1.13727,
    hartree_fock_energy: -1.1167,
    exact_energy: -1.1373,
    qubits: 4,
    pauli_terms: 15,
};

const LIH_TABLE: MoleculeTable = MoleculeTable {
    reference_energy: -7.8773,
    hartree_fock_energy: -7.8634,
    exact_energy: -7.8811,
    qubits: 12,
    pauli_terms: 631,
};

impl Molecule {
    /// Table row for this molecule.
    pub fn table(&self) -> &'static MoleculeTable {
        match self {
            Molecule::H2 => &H2_TABLE,
            Molecule::LiH => &LIH_TABLE,
        }
    }

    /// Convergence target of the simulated run (Ha).
    pub fn reference_energy(&self) -> f64 {
        self.table().reference_energy
    }
}

/// Ansatz family, recognised from the free-text ansatz label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ansatz {
    /// Unitary coupled-cluster singles and doubles.
    Uccsd,
    /// Hardware-efficient layered rotations with linear entanglers.
    HardwareEfficient,
}

impl Ansatz {
    /// Classify an ansatz label. Unrecognised labels are treated as UCCSD.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "hea" | "hardwareefficient" | "efficientsu2" | "twolocal" | "ry" | "realamplitudes" => {
                Self::HardwareEfficient
            }
            _ => Self::Uccsd,
        }
    }

    /// Circuit depth of this ansatz for the given molecule.
    pub fn circuit_depth(&self, molecule: Molecule) -> u32 {
        match (self, molecule) {
            (Self::Uccsd, Molecule::H2) => 16,
            (Self::Uccsd, Molecule::LiH) => 240,
            (Self::HardwareEfficient, Molecule::H2) => 6,
            (Self::HardwareEfficient, Molecule::LiH) => 18,
        }
    }
}

/// How a backend label executes circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendMode {
    /// Exact statevector evaluation; no shots are consumed.
    ExactStatevector,
    /// Sampled execution; every evaluation consumes the configured shots.
    Sampled,
}

impl BackendMode {
    /// Classify a backend label.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("statevector") || label == "exact" {
            Self::ExactStatevector
        } else {
            Self::Sampled
        }
    }

    /// Total shots consumed after `evaluations` energy evaluations.
    pub fn total_shots(&self, shots: u32, evaluations: u32) -> u64 {
        match self {
            Self::ExactStatevector => 0,
            Self::Sampled => u64::from(shots) * u64::from(evaluations),
        }
    }
}

/// Circuit resources that do not change during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitResources {
    /// Qubit count.
    pub qubits: u32,
    /// Hamiltonian term count.
    pub pauli_terms: u32,
    /// Ansatz circuit depth.
    pub circuit_depth: u32,
}

impl CircuitResources {
    /// Look up the resources for a configuration.
    pub fn for_config(config: &MoleculeConfig) -> Self {
        let table = config.molecule.table();
        Self {
            qubits: table.qubits,
            pauli_terms: table.pauli_terms,
            circuit_depth: Ansatz::from_label(&config.ansatz).circuit_depth(config.molecule),
        }
    }
}
