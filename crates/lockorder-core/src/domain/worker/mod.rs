//! Workers
//!
//! A worker is a named unit of execution contending for resources. Its
//! lifecycle is create → run → terminate. Each worker carries a cooperative
//! interrupt flag that the acquisition protocol observes but never acts on
//! beyond cutting the simulated delay short.

pub mod handle;

pub use handle::WorkerHandle;

use crate::domain::locking::{ExclusiveResource, OrderedAcquirer};
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::debug;

/// A named worker with an interrupt flag
///
/// Clones share the same interrupt flag.
#[derive(Debug, Clone)]
pub struct Worker {
    name: String,
    interrupt: CancellationToken,
}

impl Worker {
    /// Create a worker with a clear interrupt flag
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interrupt: CancellationToken::new(),
        }
    }

    /// Get the worker name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the interrupt flag
    ///
    /// Interrupting is sticky: the flag stays set for the rest of the
    /// worker's life.
    pub fn interrupt(&self) {
        debug!(worker = %self.name, "Interrupt requested");
        self.interrupt.cancel();
    }

    /// Check the interrupt flag
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.is_cancelled()
    }

    /// Resolves once the worker is interrupted (immediately if it already is)
    pub(crate) fn interrupted(&self) -> WaitForCancellationFuture<'_> {
        self.interrupt.cancelled()
    }

    /// Run `acquire_in_order(first, second, self)` on its own task
    pub fn spawn(
        self,
        acquirer: OrderedAcquirer,
        first: Arc<ExclusiveResource>,
        second: Arc<ExclusiveResource>,
    ) -> WorkerHandle {
        debug!(
            worker = %self.name,
            first = %first.name(),
            second = %second.name(),
            "Spawning worker"
        );

        let worker = self.clone();
        let join = tokio::spawn(async move {
            acquirer.acquire_in_order(&first, &second, &worker).await
        });

        WorkerHandle::new(self, join)
    }
}
