//! Resource guards for RAII-style lock management
//!
//! Guards release their resource when dropped, ensuring proper cleanup
//! even in the presence of panics, task aborts or early returns.

use super::resource::ExclusiveResource;
use std::fmt;
use tokio::sync::MutexGuard;

/// Exclusive hold on an [`ExclusiveResource`]
#[derive(Debug)]
pub struct ResourceGuard<'a> {
    resource: &'a ExclusiveResource,

    /// Held mutex; dropped after `Drop::drop` has updated the counters
    _permit: MutexGuard<'a, ()>,
}

impl<'a> ResourceGuard<'a> {
    pub(crate) fn new(resource: &'a ExclusiveResource, permit: MutexGuard<'a, ()>) -> Self {
        Self {
            resource,
            _permit: permit,
        }
    }

    /// Get the held resource
    pub fn resource(&self) -> &ExclusiveResource {
        self.resource
    }

    /// Name of the worker holding this guard
    pub fn holder(&self) -> String {
        self.resource.holder().unwrap_or_default()
    }

    /// Release the resource explicitly (normally done automatically on drop)
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ResourceGuard<'_> {
    fn drop(&mut self) {
        self.resource.mark_released();
    }
}

impl fmt::Display for ResourceGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guard[{}:{}]", self.resource.name(), self.holder())
    }
}
