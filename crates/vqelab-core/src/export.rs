//! Export Module: one JSON document with configuration, result and curve.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::MoleculeConfig;
use crate::error::{Result, VqeError};
use crate::model::{DissociationPoint, VqeResult};
use crate::session::Session;

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Layout of the exported file.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    /// Configuration the result was produced with.
    pub configuration: &'a MoleculeConfig,
    /// Latest result, `null` if none.
    pub results: Option<&'a VqeResult>,
    /// Dissociation curve, possibly empty.
    pub dissociation: &'a [DissociationPoint],
}

/// A serialized export, ready to be downloaded or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name.
    pub filename: String,
    /// UTF-8 JSON document.
    pub contents: String,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its own file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.contents)
            .map_err(|e| VqeError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(path)
    }
}

/// `vqe_results_<molecule>_<bondLength>A.json`.
pub fn export_filename(config: &MoleculeConfig) -> String {
    format!(
        "vqe_results_{}_{}A.json",
        config.molecule.label(),
        config.bond_length
    )
}

/// Serialize the current state, or return `None` when there is no result yet.
///
/// Nothing is serialized in the `None` case.
pub fn export(
    configuration: &MoleculeConfig,
    results: Option<&VqeResult>,
    dissociation: &[DissociationPoint],
    config: &ExportConfig,
) -> Result<Option<ExportArtifact>> {
    let Some(results) = results else {
        return Ok(None);
    };

    let document = ExportDocument {
        configuration,
        results: Some(results),
        dissociation,
    };
    let contents = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    Ok(Some(ExportArtifact {
        filename: export_filename(configuration),
        contents,
    }))
}

impl Session {
    /// Export the session's result with the configuration that produced it,
    /// plus the dissociation curve.
    pub fn export(&self, config: &ExportConfig) -> Result<Option<ExportArtifact>> {
        export(self.result_config(), self.result(), self.dissociation(), config)
    }
}
