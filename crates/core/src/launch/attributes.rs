use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The persisted settings of a Gradle run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleRunConfigurationAttributes {
    pub tasks: Vec<String>,
    pub working_dir: PathBuf,
    #[serde(default)]
    pub gradle_distribution: Option<String>,
    #[serde(default)]
    pub java_home: Option<PathBuf>,
    #[serde(default)]
    pub jvm_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default = "default_true")]
    pub show_execution_view: bool,
    #[serde(default = "default_true")]
    pub show_console_view: bool,
    #[serde(default)]
    pub override_workspace_settings: bool,
    #[serde(default)]
    pub offline_mode: bool,
    #[serde(default)]
    pub build_scans_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl GradleRunConfigurationAttributes {
    pub fn new(tasks: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            tasks,
            working_dir: working_dir.into(),
            gradle_distribution: None,
            java_home: None,
            jvm_arguments: Vec::new(),
            arguments: Vec::new(),
            show_execution_view: true,
            show_console_view: true,
            override_workspace_settings: false,
            offline_mode: false,
            build_scans_enabled: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
