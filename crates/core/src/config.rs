use crate::error::{BuildshipError, Result};
use std::path::PathBuf;

/// Environment variable that overrides the workspace root.
pub const WORKSPACE_ROOT_ENV: &str = "BUILDSHIP_WORKSPACE_ROOT";

/// Host settings resolved once at startup and handed to the operations that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub workspace_root: PathBuf,
}

impl WorkspaceConfig {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
        }
    }

    /// Explicit root first, then the environment, then the current directory.
    pub fn resolve(explicit_root: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(explicit_root, |key| std::env::var(key).ok())
    }

    pub fn resolve_with(
        explicit_root: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if let Some(root) = explicit_root {
            return Ok(Self::new(root));
        }

        if let Some(root) = env(WORKSPACE_ROOT_ENV).filter(|v| !v.trim().is_empty()) {
            return Ok(Self::new(root));
        }

        let cwd = std::env::current_dir().map_err(|e| {
            BuildshipError::Config(format!("cannot determine workspace root: {}", e))
        })?;
        Ok(Self::new(cwd))
    }
}
