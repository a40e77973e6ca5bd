use buildship_core::launch::{
    BuildLauncher, ExecuteBuildLaunchRequestEvent, ExecuteLaunchRequestListener,
    GradleRunConfigurationAttributes, LaunchListeners,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Reports launches on the log instead of attaching a console.
struct LoggingListener;

impl ExecuteLaunchRequestListener for LoggingListener {
    fn on_launch_request(&self, event: &ExecuteBuildLaunchRequestEvent) {
        let request = event.request();
        info!(
            "{}: gradle {} {} (in {})",
            event.process_name(),
            request.tasks.join(" "),
            request.arguments.join(" "),
            request.working_dir.display()
        );
        if let Some(job) = event.build_job() {
            info!("Scheduled as job #{} ({:?})", job.id(), job.state());
        }
    }
}

pub fn run(attributes: PathBuf, name: String) -> Result<(), Box<dyn std::error::Error>> {
    let attributes = GradleRunConfigurationAttributes::load(&attributes)?;

    let listeners = Arc::new(LaunchListeners::new());
    listeners.add(Arc::new(LoggingListener));

    let event = BuildLauncher::new(listeners).launch(attributes, name)?;

    // Nothing runs the build from here; close the job once listeners have seen it.
    if let Some(job) = event.build_job() {
        job.finish();
        info!("Job #{} {:?}", job.id(), job.state());
    }
    Ok(())
}
