//! Domain layer
//!
//! Resources, the ordered acquirer, and the workers that use it.

pub mod locking;
pub mod worker;
