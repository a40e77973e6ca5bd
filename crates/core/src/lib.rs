pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod project;

pub use config::WorkspaceConfig;
pub use error::{BuildshipError, Result};
pub use project::{LocationConflict, ProjectDescriptor, ValidateProjectLocationOperation};
