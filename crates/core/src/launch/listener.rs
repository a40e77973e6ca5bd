use super::event::ExecuteBuildLaunchRequestEvent;
use std::sync::{Arc, RwLock};

/// Reacts to build launches, e.g. by attaching a console to the new process.
pub trait ExecuteLaunchRequestListener: Send + Sync {
    fn on_launch_request(&self, event: &ExecuteBuildLaunchRequestEvent);
}

#[derive(Default)]
pub struct LaunchListeners {
    listeners: RwLock<Vec<Arc<dyn ExecuteLaunchRequestListener>>>,
}

impl LaunchListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<dyn ExecuteLaunchRequestListener>) {
        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }

    /// Returns whether the listener was registered.
    pub fn remove(&self, listener: &Arc<dyn ExecuteLaunchRequestListener>) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let before = listeners.len();
        listeners.retain(|l| !Arc::ptr_eq(l, listener));
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every listener in registration order.
    pub fn notify(&self, event: &ExecuteBuildLaunchRequestEvent) {
        // Snapshot so callbacks can add or remove listeners.
        let snapshot: Vec<_> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in snapshot {
            listener.on_launch_request(event);
        }
    }
}
