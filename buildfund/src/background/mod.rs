pub mod toast_timer;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks named background tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task.
    /// If a task with the same ID already exists, it is aborted first.
    pub fn spawn_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.remove(task_id) {
            if !handle.is_finished() {
                tracing::debug!("Cancelling pending task {}", task_id);
            }
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    /// Abort every tracked task
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
