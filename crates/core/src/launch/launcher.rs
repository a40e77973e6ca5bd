use super::attributes::GradleRunConfigurationAttributes;
use super::event::ExecuteBuildLaunchRequestEvent;
use super::job::{BuildJob, JobState};
use super::listener::LaunchListeners;
use super::request::BuildRequest;
use crate::error::Result;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_PROCESS_NAME: &str = "Gradle Build";

/// Turns a run configuration into a scheduled build job and announces it.
///
/// Executing the build is up to whoever picks the job up from a listener.
pub struct BuildLauncher {
    listeners: Arc<LaunchListeners>,
}

impl BuildLauncher {
    pub fn new(listeners: Arc<LaunchListeners>) -> Self {
        Self { listeners }
    }

    pub fn listeners(&self) -> &Arc<LaunchListeners> {
        &self.listeners
    }

    pub fn launch(
        &self,
        attributes: GradleRunConfigurationAttributes,
        process_name: impl Into<String>,
    ) -> Result<ExecuteBuildLaunchRequestEvent> {
        let process_name = process_name.into();
        let job = BuildJob::new(process_name.clone());
        let request = BuildRequest::from_attributes(&attributes);

        let event = ExecuteBuildLaunchRequestEvent::new(
            Some(job.clone()),
            Some(request),
            Some(attributes),
            Some(process_name),
        )?;

        job.set_state(JobState::Running);
        info!(
            job_id = job.id(),
            tasks = ?event.request().tasks,
            "Launching {}",
            event.process_name()
        );
        self.listeners.notify(&event);

        Ok(event)
    }
}
