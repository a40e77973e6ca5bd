//! Project descriptors and the structural checks run on them before an import.

pub mod location;

pub use location::{LocationConflict, ValidateProjectLocationOperation};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A build project as reported by the model import: where it lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub project_directory: PathBuf,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, project_directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            project_directory: project_directory.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Resolves the directory against the filesystem, keeping it unchanged if that fails.
    pub fn canonicalized(self) -> Self {
        let project_directory = self
            .project_directory
            .canonicalize()
            .unwrap_or(self.project_directory);
        Self {
            name: self.name,
            project_directory,
        }
    }
}

/// Reads a JSON array of descriptors.
pub fn load_descriptors(path: &Path) -> Result<Vec<ProjectDescriptor>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
