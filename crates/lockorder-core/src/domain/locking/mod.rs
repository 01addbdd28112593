//! Ordered locking of exclusive resources
//!
//! This module provides the resource-ordering discipline that keeps
//! concurrent workers from deadlocking on a pair of exclusive resources.
//!
//! # Architecture
//!
//! - **Resources**: `ExclusiveResource`, an async mutex with holder bookkeeping
//! - **Guards**: RAII-style `ResourceGuard` for automatic release
//! - **Acquirer**: `OrderedAcquirer` taking two resources in caller-given order
//! - **Events and sinks**: `TraceEvent` progress lines delivered to a `TraceSink`
//!
//! # Ordering constraint
//!
//! Deadlock freedom is a convention, not a runtime check. As long as every
//! worker requests the pair in the same global order, no worker can hold the
//! second resource while waiting for the first, so the wait-for graph stays
//! acyclic. A caller that passes the pair reversed can deadlock.
//!
//! # Example
//!
//! ```ignore
//! use lockorder_core::domain::locking::{ConsoleSink, ExclusiveResource, OrderedAcquirer};
//! use lockorder_core::domain::worker::Worker;
//!
//! let a = ExclusiveResource::new("A");
//! let b = ExclusiveResource::new("B");
//! let acquirer = OrderedAcquirer::new(Arc::new(ConsoleSink));
//!
//! let report = acquirer.acquire_in_order(&a, &b, &Worker::new("T1")).await;
//! ```

pub mod acquirer;
pub mod event;
pub mod guard;
pub mod resource;
pub mod sink;

// Re-export main types
pub use acquirer::{AcquisitionReport, DEFAULT_DELAY, OrderedAcquirer};
pub use event::{TraceEvent, TraceKind};
pub use guard::ResourceGuard;
pub use resource::{ExclusiveResource, ResourceStats, ResourceStatus};
pub use sink::{ConsoleSink, RecordingSink, TraceSink};
