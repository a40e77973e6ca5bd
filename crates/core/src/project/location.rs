use super::ProjectDescriptor;
use crate::error::{BuildshipError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A project layout the workspace cannot host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationConflict {
    /// Several projects claim the same directory. Names are in input order.
    SharedLocation {
        location: PathBuf,
        projects: Vec<String>,
    },
    /// A project sits exactly at the workspace root.
    WorkspaceRoot {
        project: String,
        workspace_root: PathBuf,
    },
}

impl fmt::Display for LocationConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationConflict::SharedLocation { location, projects } => write!(
                f,
                "The following projects all located in the {} directory: {}",
                absolute_display(location),
                projects.join(", ")
            ),
            LocationConflict::WorkspaceRoot {
                project,
                workspace_root,
            } => write!(
                f,
                "Project {} location matches workspace root {}",
                project,
                absolute_display(workspace_root)
            ),
        }
    }
}

impl std::error::Error for LocationConflict {}

/// Relative paths are shown resolved against the current directory. Display only.
fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// The path as spelled, minus trailing separators. No `.` or `..` handling.
fn pathname(path: &Path) -> &[u8] {
    let mut bytes = path.as_os_str().as_encoded_bytes();
    while bytes.len() > 1
        && bytes
            .last()
            .is_some_and(|&b| std::path::is_separator(b as char))
    {
        bytes = &bytes[..bytes.len() - 1];
    }
    bytes
}

/// Verifies that no project is located in the workspace root and that each project has a
/// unique location.
///
/// Paths are compared by spelling, so `/repo/./app` and `/repo/app` are different
/// locations. Two spellings of one directory only collide if the descriptor source
/// canonicalized them beforehand.
pub struct ValidateProjectLocationOperation {
    projects: Vec<ProjectDescriptor>,
    workspace_root: PathBuf,
}

impl ValidateProjectLocationOperation {
    pub fn new(
        projects: impl IntoIterator<Item = ProjectDescriptor>,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            projects: projects.into_iter().collect(),
            workspace_root: workspace_root.into(),
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Fails with the first conflicting location, in first-seen order.
    ///
    /// The check is not interruptible; a token that is already cancelled skips it.
    pub fn run(&self, cancel: Option<&CancellationToken>) -> Result<()> {
        if cancel.is_some_and(|token| token.is_cancelled()) {
            return Err(BuildshipError::Cancelled);
        }

        debug!(
            projects = self.projects.len(),
            workspace_root = %self.workspace_root.display(),
            "Validating project locations"
        );

        match self.check(true).into_iter().next() {
            Some(conflict) => {
                warn!("{}", conflict);
                Err(conflict.into())
            }
            None => Ok(()),
        }
    }

    /// Every conflict, one per offending location.
    pub fn conflicts(&self) -> Vec<LocationConflict> {
        self.check(false)
    }

    fn check(&self, stop_at_first: bool) -> Vec<LocationConflict> {
        // Keyed by spelling; the first-seen path is kept for reporting.
        let mut location_to_names: IndexMap<&[u8], (&Path, Vec<&str>)> = IndexMap::new();
        for project in &self.projects {
            location_to_names
                .entry(pathname(&project.project_directory))
                .or_insert_with(|| (project.project_directory.as_path(), Vec::new()))
                .1
                .push(&project.name);
        }

        let root = pathname(&self.workspace_root);
        let mut conflicts = Vec::new();
        for (key, (location, names)) in location_to_names {
            let conflict = if names.len() > 1 {
                LocationConflict::SharedLocation {
                    location: location.to_path_buf(),
                    projects: names.iter().map(|n| n.to_string()).collect(),
                }
            } else if key == root {
                LocationConflict::WorkspaceRoot {
                    project: names[0].to_string(),
                    workspace_root: self.workspace_root.clone(),
                }
            } else {
                continue;
            };

            conflicts.push(conflict);
            if stop_at_first {
                break;
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, dir: &str) -> ProjectDescriptor {
        ProjectDescriptor::new(name, dir)
    }

    #[test]
    fn test_shared_location_message() {
        let conflict = LocationConflict::SharedLocation {
            location: PathBuf::from("/repo/a"),
            projects: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(
            conflict.to_string(),
            "The following projects all located in the /repo/a directory: a, b, c"
        );
    }

    #[test]
    fn test_workspace_root_message() {
        let conflict = LocationConflict::WorkspaceRoot {
            project: "root".to_string(),
            workspace_root: PathBuf::from("/ws"),
        };
        assert_eq!(
            conflict.to_string(),
            "Project root location matches workspace root /ws"
        );
    }

    #[test]
    fn test_shared_location_is_not_checked_against_root() {
        let op = ValidateProjectLocationOperation::new(
            vec![project("a", "/ws"), project("b", "/ws")],
            "/ws",
        );
        assert_eq!(
            op.conflicts(),
            vec![LocationConflict::SharedLocation {
                location: PathBuf::from("/ws"),
                projects: vec!["a".to_string(), "b".to_string()],
            }]
        );
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let op = ValidateProjectLocationOperation::new(
            vec![
                project("z", "/repo/z"),
                project("root", "/ws"),
                project("z2", "/repo/z"),
            ],
            "/ws",
        );
        let conflicts = op.conflicts();
        assert_eq!(conflicts.len(), 2);
        assert!(matches!(
            &conflicts[0],
            LocationConflict::SharedLocation { projects, .. } if projects == &["z", "z2"]
        ));
        assert!(matches!(
            &conflicts[1],
            LocationConflict::WorkspaceRoot { project, .. } if project == "root"
        ));
    }

    #[test]
    fn test_pathname_strips_trailing_separators_only() {
        assert_eq!(pathname(Path::new("/ws/")), b"/ws");
        assert_eq!(pathname(Path::new("/ws//")), b"/ws");
        assert_eq!(pathname(Path::new("/ws/.")), b"/ws/.");
        assert_eq!(pathname(Path::new("/")), b"/");
    }

    #[test]
    fn test_trailing_separator_matches_root() {
        let op = ValidateProjectLocationOperation::new(vec![project("root", "/ws/")], "/ws");
        assert_eq!(op.conflicts().len(), 1);
    }

    #[test]
    fn test_relative_location_is_reported_absolute() {
        let conflict = LocationConflict::SharedLocation {
            location: PathBuf::from("repo/shared"),
            projects: vec!["a".to_string(), "b".to_string()],
        };
        let expected = std::env::current_dir().unwrap().join("repo/shared");
        assert_eq!(
            conflict.to_string(),
            format!(
                "The following projects all located in the {} directory: a, b",
                expected.display()
            )
        );
    }

    #[test]
    fn test_cancelled_token_skips_check() {
        let token = CancellationToken::new();
        token.cancel();
        let op = ValidateProjectLocationOperation::new(vec![project("root", "/ws")], "/ws");
        assert!(matches!(op.run(Some(&token)), Err(BuildshipError::Cancelled)));
    }

    #[test]
    fn test_live_token_does_not_interfere() {
        let token = CancellationToken::new();
        let op = ValidateProjectLocationOperation::new(vec![project("a", "/repo/a")], "/ws");
        assert!(op.run(Some(&token)).is_ok());
    }
}
