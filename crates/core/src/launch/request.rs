use super::attributes::GradleRunConfigurationAttributes;
use std::path::PathBuf;

/// What gets sent to Gradle for one build: tasks plus the arguments to run them with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub tasks: Vec<String>,
    pub arguments: Vec<String>,
    pub jvm_arguments: Vec<String>,
    pub working_dir: PathBuf,
}

impl BuildRequest {
    pub fn new(tasks: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            tasks,
            arguments: Vec::new(),
            jvm_arguments: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn from_attributes(attributes: &GradleRunConfigurationAttributes) -> Self {
        let mut arguments = attributes.arguments.clone();
        if attributes.override_workspace_settings {
            if attributes.offline_mode {
                arguments.push("--offline".to_string());
            }
            if attributes.build_scans_enabled {
                arguments.push("--scan".to_string());
            }
        }

        Self {
            tasks: attributes.tasks.clone(),
            arguments,
            jvm_arguments: attributes.jvm_arguments.clone(),
            working_dir: attributes.working_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes_copies_tasks_and_arguments() {
        let mut attrs =
            GradleRunConfigurationAttributes::new(vec!["clean".into(), "build".into()], "/repo");
        attrs.arguments = vec!["--info".into()];
        attrs.jvm_arguments = vec!["-Xmx1g".into()];

        let request = BuildRequest::from_attributes(&attrs);
        assert_eq!(request.tasks, vec!["clean", "build"]);
        assert_eq!(request.arguments, vec!["--info"]);
        assert_eq!(request.jvm_arguments, vec!["-Xmx1g"]);
        assert_eq!(request.working_dir, PathBuf::from("/repo"));
    }

    #[test]
    fn test_offline_and_scan_flags_only_apply_when_overriding() {
        let mut attrs = GradleRunConfigurationAttributes::new(vec!["build".into()], "/repo");
        attrs.offline_mode = true;
        attrs.build_scans_enabled = true;
        assert!(BuildRequest::from_attributes(&attrs).arguments.is_empty());

        attrs.override_workspace_settings = true;
        assert_eq!(
            BuildRequest::from_attributes(&attrs).arguments,
            vec!["--offline", "--scan"]
        );
    }
}
