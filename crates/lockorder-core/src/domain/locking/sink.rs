//! Trace sinks
//!
//! Where acquisition progress goes. The CLI prints to stdout; tests record in
//! memory and inspect the order afterwards.

use super::event::{TraceEvent, TraceKind};
use std::sync::{PoisonError, RwLock};

/// Destination for trace events
pub trait TraceSink: Send + Sync {
    /// Deliver one event
    fn emit(&self, event: &TraceEvent);
}

/// Prints one line per event to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn emit(&self, event: &TraceEvent) {
        println!("{}", event);
    }
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RwLock<Vec<TraceEvent>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get events emitted by one worker
    pub fn events_for(&self, worker: &str) -> Vec<TraceEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.worker == worker)
            .cloned()
            .collect()
    }

    /// Kinds emitted by one worker, in order
    pub fn kinds_for(&self, worker: &str) -> Vec<TraceKind> {
        self.events_for(worker).iter().map(|e| e.kind).collect()
    }

    /// Console lines of all events
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(TraceEvent::to_string).collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all events
    pub fn clear(&self) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TraceSink for RecordingSink {
    fn emit(&self, event: &TraceEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
