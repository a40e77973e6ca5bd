use buildship_core::project::load_descriptors;
use buildship_core::{BuildshipError, ValidateProjectLocationOperation, WorkspaceConfig};
use std::path::PathBuf;
use tracing::{error, info};

pub fn run(
    projects: PathBuf,
    workspace_root: Option<PathBuf>,
    canonicalize: bool,
    all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = WorkspaceConfig::resolve(workspace_root)?;

    let mut descriptors = load_descriptors(&projects)?;
    if canonicalize {
        descriptors = descriptors.into_iter().map(|d| d.canonicalized()).collect();
    }
    let count = descriptors.len();

    let op = ValidateProjectLocationOperation::new(descriptors, config.workspace_root);

    if all {
        let conflicts = op.conflicts();
        if let Some(first) = conflicts.first() {
            for conflict in &conflicts {
                error!("{}", conflict);
            }
            return Err(BuildshipError::from(first.clone()).into());
        }
    } else {
        op.run(None)?;
    }

    info!(
        "{} project(s) validated against workspace root {}",
        count,
        op.workspace_root().display()
    );
    Ok(())
}
