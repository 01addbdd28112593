//! Handle to a running worker

use super::Worker;
use crate::domain::locking::AcquisitionReport;
use crate::error::{Error, Result};
use std::fmt;
use tokio::task::JoinHandle;

/// A spawned worker
///
/// Dropping the handle detaches the worker; it keeps running.
pub struct WorkerHandle {
    worker: Worker,
    join: JoinHandle<AcquisitionReport>,
}

impl WorkerHandle {
    pub(crate) fn new(worker: Worker, join: JoinHandle<AcquisitionReport>) -> Self {
        Self { worker, join }
    }

    /// Get the worker name
    pub fn name(&self) -> &str {
        self.worker.name()
    }

    /// Get the underlying worker
    pub fn worker(&self) -> &Worker {
        &self.worker
    }

    /// Set the worker's interrupt flag
    pub fn interrupt(&self) {
        self.worker.interrupt();
    }

    /// Check the worker's interrupt flag
    pub fn is_interrupted(&self) -> bool {
        self.worker.is_interrupted()
    }

    /// Whether the worker has terminated
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Abort the worker task; any resource it holds is released
    pub fn abort(&self) {
        self.join.abort();
    }

    /// Wait for the worker to terminate
    pub async fn join(self) -> Result<AcquisitionReport> {
        let name = self.worker.name().to_string();
        self.join.await.map_err(|e| Error::from_join(&name, e))
    }
}

impl fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("worker", &self.worker)
            .field("finished", &self.join.is_finished())
            .finish()
    }
}
