//! Acquisition trace events
//!
//! One event per progress step of a worker inside the ordered acquirer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Type of trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// The worker holds the first resource
    AcquiredFirst,
    /// The worker is about to wait for the second resource
    TryingSecond,
    /// The worker holds both resources
    Concluded,
}

impl TraceKind {
    /// Console wording of this step
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcquiredFirst => "acquired first",
            Self::TryingSecond => "trying to acquire second",
            Self::Concluded => "concluded",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single trace event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Unique event identifier
    pub id: Uuid,
    /// Worker that made progress
    pub worker: String,
    /// Step reached
    pub kind: TraceKind,
    /// Resource the step is about
    pub resource: String,
    /// When the event occurred
    pub created_at: DateTime<Utc>,
}

impl TraceEvent {
    /// Create a new trace event
    pub fn new(worker: &str, kind: TraceKind, resource: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            worker: worker.to_string(),
            kind,
            resource: resource.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn acquired_first(worker: &str, resource: &str) -> Self {
        Self::new(worker, TraceKind::AcquiredFirst, resource)
    }

    pub fn trying_second(worker: &str, resource: &str) -> Self {
        Self::new(worker, TraceKind::TryingSecond, resource)
    }

    pub fn concluded(worker: &str, resource: &str) -> Self {
        Self::new(worker, TraceKind::Concluded, resource)
    }
}

/// Renders the console line, `"<worker> <kind>"`
impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.worker, self.kind)
    }
}
