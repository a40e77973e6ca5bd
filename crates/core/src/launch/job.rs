use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;

static NEXT_JOB_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JobState {
    Waiting = 0,
    Running = 1,
    Done = 2,
}

impl JobState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => JobState::Running,
            2 => JobState::Done,
            _ => JobState::Waiting,
        }
    }
}

struct JobInner {
    id: u64,
    name: String,
    state: AtomicU8,
    cancel: CancellationToken,
}

/// Handle to a build running on a worker elsewhere. Clones refer to the same job.
#[derive(Clone)]
pub struct BuildJob {
    inner: Arc<JobInner>,
}

impl BuildJob {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(JobInner {
                id: NEXT_JOB_ID.fetch_add(1, Ordering::Relaxed),
                name: name.into(),
                state: AtomicU8::new(JobState::Waiting as u8),
                cancel: CancellationToken::new(),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn state(&self) -> JobState {
        JobState::from_u8(self.inner.state.load(Ordering::Acquire))
    }

    pub fn set_state(&self, state: JobState) {
        self.inner.state.store(state as u8, Ordering::Release);
    }

    /// Marks the build as finished, whether it completed or was cancelled.
    pub fn finish(&self) {
        self.set_state(JobState::Done);
    }

    pub fn cancel(&self) {
        self.inner.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Token for the worker executing the build; cancelled along with the job.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.inner.cancel.child_token()
    }

    pub fn ptr_eq(&self, other: &BuildJob) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for BuildJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildJob")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_is_waiting_with_unique_id() {
        let a = BuildJob::new("a");
        let b = BuildJob::new("b");
        assert_eq!(a.state(), JobState::Waiting);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clones_share_state_and_cancellation() {
        let job = BuildJob::new("Gradle Build");
        let clone = job.clone();
        let worker_token = job.cancellation_token();

        clone.set_state(JobState::Running);
        assert_eq!(job.state(), JobState::Running);

        job.cancel();
        assert!(clone.is_cancelled());
        assert!(worker_token.is_cancelled());
        assert!(job.ptr_eq(&clone));
    }

    #[test]
    fn test_finish_marks_job_done() {
        let job = BuildJob::new("Gradle Build");
        job.set_state(JobState::Running);
        job.clone().finish();
        assert_eq!(job.state(), JobState::Done);
    }
}
