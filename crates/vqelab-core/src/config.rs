//! User-editable run configuration.

use serde::{Deserialize, Serialize};

/// Molecular system offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Molecule {
    /// Molecular hydrogen.
    H2,
    /// Lithium hydride.
    LiH,
}

impl Molecule {
    /// All supported molecules, in selector order.
    pub const ALL: [Molecule; 2] = [Molecule::H2, Molecule::LiH];

    /// Parse a molecule name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "h2" => Some(Self::H2),
            "lih" => Some(Self::LiH),
            _ => None,
        }
    }

    /// Short label used in filenames and JSON (`H2`, `LiH`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::H2 => "H2",
            Self::LiH => "LiH",
        }
    }

    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::H2 => "H₂ (Hydrogen)",
            Self::LiH => "LiH (Lithium Hydride)",
        }
    }
}

impl std::fmt::Display for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration of a VQE run, as entered in the dashboard form.
///
/// Values are taken as given; none of them are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeConfig {
    /// Molecular system.
    pub molecule: Molecule,
    /// Bond length in Ångström.
    pub bond_length: f64,
    /// Basis set label (e.g. "sto-3g").
    pub basis: String,
    /// Ansatz label (e.g. "UCCSD").
    pub ansatz: String,
    /// Classical optimizer label (e.g. "COBYLA").
    pub optimizer: String,
    /// Execution backend label (e.g. "statevector", "qasm_simulator").
    pub backend: String,
    /// Shots per energy evaluation.
    pub shots: u32,
    /// Maximum optimizer iterations.
    pub max_iterations: u32,
}

impl Default for MoleculeConfig {
    fn default() -> Self {
        Self {
            molecule: Molecule::H2,
            bond_length: 0.74,
            basis: "sto-3g".to_string(),
            ansatz: "UCCSD".to_string(),
            optimizer: "COBYLA".to_string(),
            backend: "statevector".to_string(),
            shots: 1024,
            max_iterations: 100,
        }
    }
}

impl MoleculeConfig {
    /// Create a default configuration for the given molecule.
    pub fn for_molecule(molecule: Molecule) -> Self {
        Self {
            molecule,
            ..Self::default()
        }
    }

    /// Set the backend label.
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Set the ansatz label.
    pub fn with_ansatz(mut self, ansatz: impl Into<String>) -> Self {
        self.ansatz = ansatz.into();
        self
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Set the bond length.
    pub fn with_bond_length(mut self, bond_length: f64) -> Self {
        self.bond_length = bond_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molecule_from_name() {
        assert_eq!(Molecule::from_name("h2"), Some(Molecule::H2));
        assert_eq!(Molecule::from_name("LIH"), Some(Molecule::LiH));
        assert_eq!(Molecule::from_name("beh2"), None);
    }

    #[test]
    fn test_config_json_field_names() {
        let json = serde_json::to_value(MoleculeConfig::default()).unwrap();
        assert_eq!(json["molecule"], "H2");
        assert_eq!(json["bondLength"], 0.74);
        assert_eq!(json["maxIterations"], 100);
        assert_eq!(json["backend"], "statevector");
    }

    #[test]
    fn test_config_deserializes_lih() {
        let config: MoleculeConfig = serde_json::from_str(
            r#"{"molecule":"LiH","bondLength":1.6,"basis":"sto-3g","ansatz":"UCCSD",
                "optimizer":"SPSA","backend":"qasm_simulator","shots":4096,"maxIterations":200}"#,
        )
        .unwrap();
        assert_eq!(config.molecule, Molecule::LiH);
        assert_eq!(config.shots, 4096);
    }
}
