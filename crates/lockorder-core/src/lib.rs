//! Lockorder Core Library
//!
//! This crate provides the core functionality for lockorder, including:
//! - Exclusive resources with RAII guards
//! - The ordered dual-lock acquirer (canonical lock ordering)
//! - Named workers with a cooperative interrupt flag
//! - Trace events and sinks (console, in-memory, fan-out)
//! - The two-worker demo runner

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commands::demo::{DemoOutcome, run_demo};
    pub use crate::config::DemoConfig;
    pub use crate::domain::locking::{
        AcquisitionReport, ConsoleSink, ExclusiveResource, OrderedAcquirer, RecordingSink,
        TraceEvent, TraceKind, TraceSink,
    };
    pub use crate::domain::worker::{Worker, WorkerHandle};
    pub use crate::error::{Error, Result};
}
