//! Build launches: the request handed to Gradle, the job running it, and the event
//! announcing it to interested listeners.

pub mod attributes;
pub mod event;
pub mod job;
pub mod launcher;
pub mod listener;
pub mod request;

pub use attributes::GradleRunConfigurationAttributes;
pub use event::ExecuteBuildLaunchRequestEvent;
pub use job::{BuildJob, JobState};
pub use launcher::{BuildLauncher, DEFAULT_PROCESS_NAME};
pub use listener::{ExecuteLaunchRequestListener, LaunchListeners};
pub use request::BuildRequest;
