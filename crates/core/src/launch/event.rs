use super::attributes::GradleRunConfigurationAttributes;
use super::job::BuildJob;
use super::request::BuildRequest;
use crate::error::{BuildshipError, Result};

/// Announces that a build launch was requested.
///
/// Carries the job running the build (if one was scheduled), the request sent to
/// Gradle, the run configuration it came from, and the name shown for the process.
#[derive(Debug)]
pub struct ExecuteBuildLaunchRequestEvent {
    build_job: Option<BuildJob>,
    request: BuildRequest,
    run_configuration_attributes: GradleRunConfigurationAttributes,
    process_name: String,
}

impl ExecuteBuildLaunchRequestEvent {
    pub fn new(
        build_job: Option<BuildJob>,
        request: Option<BuildRequest>,
        run_configuration_attributes: Option<GradleRunConfigurationAttributes>,
        process_name: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            build_job,
            request: request.ok_or(BuildshipError::MissingArgument("request"))?,
            run_configuration_attributes: run_configuration_attributes
                .ok_or(BuildshipError::MissingArgument("run_configuration_attributes"))?,
            process_name: process_name.ok_or(BuildshipError::MissingArgument("process_name"))?,
        })
    }

    pub fn build_job(&self) -> Option<&BuildJob> {
        self.build_job.as_ref()
    }

    pub fn request(&self) -> &BuildRequest {
        &self.request
    }

    pub fn run_configuration_attributes(&self) -> &GradleRunConfigurationAttributes {
        &self.run_configuration_attributes
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}
