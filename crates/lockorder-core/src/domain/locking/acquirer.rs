//! Ordered dual-lock acquirer
//!
//! Acquires two exclusive resources in the order given by the caller, holds
//! both for the length of a short critical section, then releases them in
//! reverse order. The acquirer never reorders its arguments: deadlock freedom
//! depends on every caller passing the same `(first, second)` pair.
//!
//! A worker that is interrupted during the simulated delay keeps its interrupt
//! flag set and still goes on to acquire the second resource.

use super::event::TraceEvent;
use super::resource::ExclusiveResource;
use super::sink::TraceSink;
use crate::domain::worker::Worker;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

/// Default length of the simulated work while holding the first resource
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Outcome of one ordered acquisition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionReport {
    /// Worker that ran the acquisition
    pub worker: String,
    /// Name of the resource acquired first
    pub first: String,
    /// Name of the resource acquired second
    pub second: String,
    /// Whether an interrupt cut the simulated delay short
    pub delay_interrupted: bool,
    /// Worker interrupt flag at the end of the run
    pub interrupted: bool,
    /// Time from the call to the release of both resources
    pub elapsed: Duration,
}

/// Acquires resource pairs in caller-given order and reports progress to a sink
#[derive(Clone)]
pub struct OrderedAcquirer {
    sink: Arc<dyn TraceSink>,
    delay: Duration,
}

impl OrderedAcquirer {
    /// Create an acquirer with the default delay
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self {
            sink,
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get the simulated delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Acquire `first`, then `second`, on behalf of `worker`
    ///
    /// Blocks until both are held. Every caller must pass resources in the same
    /// global order; passing them reversed while another worker uses the
    /// canonical order can deadlock, and nothing here detects it.
    pub async fn acquire_in_order(
        &self,
        first: &ExclusiveResource,
        second: &ExclusiveResource,
        worker: &Worker,
    ) -> AcquisitionReport {
        let name = worker.name();
        let start = Instant::now();

        debug!(
            worker = %name,
            first = %first.name(),
            second = %second.name(),
            "Attempting ordered acquisition"
        );

        let delay_interrupted = {
            let _first_guard = first.acquire(name).await;
            self.sink.emit(&TraceEvent::acquired_first(name, first.name()));

            let delay_interrupted = self.simulated_delay(worker).await;

            self.sink.emit(&TraceEvent::trying_second(name, second.name()));
            {
                let _second_guard = second.acquire(name).await;
                self.sink.emit(&TraceEvent::concluded(name, second.name()));
            }

            delay_interrupted
        };

        let elapsed = start.elapsed();
        let interrupted = worker.is_interrupted();

        info!(
            worker = %name,
            elapsed_ms = elapsed.as_millis() as u64,
            delay_interrupted,
            interrupted,
            "Ordered acquisition concluded"
        );

        AcquisitionReport {
            worker: name.to_string(),
            first: first.name().to_string(),
            second: second.name().to_string(),
            delay_interrupted,
            interrupted,
            elapsed,
        }
    }

    /// Sleep for the configured delay unless the worker is interrupted
    ///
    /// Returns true when the interrupt ended the delay early. The interrupt
    /// flag is left set.
    async fn simulated_delay(&self, worker: &Worker) -> bool {
        tokio::select! {
            biased;
            _ = worker.interrupted() => {
                debug!(worker = %worker.name(), "Delay interrupted, continuing");
                true
            }
            _ = sleep(self.delay) => false,
        }
    }
}

impl fmt::Debug for OrderedAcquirer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedAcquirer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
