//! Commands module - operations as library functions
//!
//! These commands are used by the CLI and by integration tests.

pub mod demo;
