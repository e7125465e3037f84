//! Energy comparisons for the results table.
//!
//! Stateless helpers over the reference tables in [`crate::tables`].

use serde::{Deserialize, Serialize};

use crate::config::Molecule;
use crate::tables::{CHEMICAL_ACCURACY_MHA, HARTREE_TO_EV};

/// Literature energies a VQE result is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEnergies {
    /// Hartree-Fock energy (Ha).
    pub hartree_fock: f64,
    /// Full configuration-interaction energy (Ha).
    pub exact: f64,
}

/// Hartree-Fock and exact energies for a molecule.
pub fn reference_energies(molecule: Molecule) -> ReferenceEnergies {
    let table = molecule.table();
    ReferenceEnergies {
        hartree_fock: table.hartree_fock_energy,
        exact: table.exact_energy,
    }
}

/// Convert Hartree to electronvolts.
pub fn hartree_to_ev(hartree: f64) -> f64 {
    hartree * HARTREE_TO_EV
}

/// Convert electronvolts to Hartree.
pub fn ev_to_hartree(ev: f64) -> f64 {
    ev / HARTREE_TO_EV
}

/// `a - b` in milli-Hartree.
pub fn difference_mha(a: f64, b: f64) -> f64 {
    (a - b) * 1000.0
}

/// Whether an error (mHa) is within chemical accuracy. The bound is strict.
pub fn is_chemically_accurate(error_mha: f64) -> bool {
    error_mha < CHEMICAL_ACCURACY_MHA
}

/// Share of the Hartree-Fock → exact correlation energy recovered by
/// `energy`, in percent.
pub fn correlation_recovered(molecule: Molecule, energy: f64) -> f64 {
    let refs = reference_energies(molecule);
    100.0 * (refs.hartree_fock - energy) / (refs.hartree_fock - refs.exact)
}

/// One row of the energy comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Method name ("Hartree-Fock", "VQE", "Exact (FCI)").
    pub method: String,
    /// Energy (Ha).
    pub energy_hartree: f64,
    /// Energy (eV).
    pub energy_ev: f64,
    /// Deviation from the exact energy (mHa).
    pub delta_exact_mha: f64,
}

impl ComparisonRow {
    fn new(method: &str, energy: f64, exact: f64) -> Self {
        Self {
            method: method.to_string(),
            energy_hartree: energy,
            energy_ev: hartree_to_ev(energy),
            delta_exact_mha: difference_mha(energy, exact),
        }
    }
}

/// Comparison rows for a molecule, with the VQE row when a result exists.
pub fn comparison_table(molecule: Molecule, vqe_energy: Option<f64>) -> Vec<ComparisonRow> {
    let refs = reference_energies(molecule);
    let mut rows = vec![ComparisonRow::new("Hartree-Fock", refs.hartree_fock, refs.exact)];
    if let Some(energy) = vqe_energy {
        rows.push(ComparisonRow::new("VQE", energy, refs.exact));
    }
    rows.push(ComparisonRow::new("Exact (FCI)", refs.exact, refs.exact));
    rows
}
