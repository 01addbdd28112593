//! The two-worker demonstration
//!
//! Builds resources A and B once, starts every configured worker at the same
//! time with the canonical order (A, B), and waits for all of them.

use crate::config::DemoConfig;
use crate::domain::locking::{
    AcquisitionReport, ExclusiveResource, OrderedAcquirer, ResourceStats, TraceSink,
};
use crate::domain::worker::Worker;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Name of the resource every worker takes first
pub const FIRST_RESOURCE: &str = "A";
/// Name of the resource every worker takes second
pub const SECOND_RESOURCE: &str = "B";

/// Result of a completed demo run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoOutcome {
    /// One report per worker, in spawn order
    pub reports: Vec<AcquisitionReport>,
    /// Final counters of A and B
    pub resources: Vec<ResourceStats>,
}

impl DemoOutcome {
    /// Find the report of one worker
    pub fn report_for(&self, worker: &str) -> Option<&AcquisitionReport> {
        self.reports.iter().find(|r| r.worker == worker)
    }

    /// Find the counters of one resource
    pub fn resource(&self, name: &str) -> Option<&ResourceStats> {
        self.resources.iter().find(|r| r.name == name)
    }
}

/// Run the demo and wait for every worker to terminate
///
/// All workers are joined even if one fails; the first failure is returned
/// afterwards.
pub async fn run_demo(config: &DemoConfig, sink: Arc<dyn TraceSink>) -> Result<DemoOutcome> {
    config.validate()?;

    let first = Arc::new(ExclusiveResource::new(FIRST_RESOURCE));
    let second = Arc::new(ExclusiveResource::new(SECOND_RESOURCE));
    let acquirer = OrderedAcquirer::new(sink).with_delay(config.delay);

    info!(
        workers = config.workers.len(),
        delay_ms = config.delay.as_millis() as u64,
        "Starting demo"
    );

    let handles: Vec<_> = config
        .workers
        .iter()
        .map(|name| Worker::new(name.as_str()).spawn(acquirer.clone(), first.clone(), second.clone()))
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    let mut failure = None;
    for handle in handles {
        match handle.join().await {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!(code = e.code(), error = %e, "Worker failed");
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }
    }

    if let Some(e) = failure {
        return Err(e);
    }

    let outcome = DemoOutcome {
        reports,
        resources: vec![first.stats(), second.stats()],
    };

    info!(
        concluded = outcome.reports.len(),
        "Demo finished, all workers joined"
    );

    Ok(outcome)
}
