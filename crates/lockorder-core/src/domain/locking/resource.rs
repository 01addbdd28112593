//! Exclusive resources
//!
//! An [`ExclusiveResource`] is an opaque lockable unit with two states: free,
//! or held by exactly one worker. It protects no data of its own; the only
//! mutation is ownership transfer through [`ExclusiveResource::acquire`] and
//! the drop of the returned guard.

use super::guard::ResourceGuard;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex as StdMutex, PoisonError};
use tokio::sync::Mutex;
use tracing::debug;

/// Resource status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Nobody holds the resource
    Free,
    /// Exactly one worker holds the resource
    Held,
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Held => write!(f, "held"),
        }
    }
}

/// Snapshot of a resource's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStats {
    /// Resource name
    pub name: String,
    /// Number of completed acquisitions
    pub acquisitions: u64,
    /// Highest number of simultaneous holders ever observed
    pub peak_holders: usize,
}

/// A unit grantable to at most one worker at a time
///
/// Acquisition blocks (asynchronously) until the resource is free. Waiters are
/// served in FIFO order. There is no timeout.
#[derive(Debug)]
pub struct ExclusiveResource {
    name: String,
    lock: Mutex<()>,
    holder: StdMutex<Option<String>>,
    holders: AtomicUsize,
    peak_holders: AtomicUsize,
    acquisitions: AtomicU64,
}

impl ExclusiveResource {
    /// Create a new free resource
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lock: Mutex::new(()),
            holder: StdMutex::new(None),
            holders: AtomicUsize::new(0),
            peak_holders: AtomicUsize::new(0),
            acquisitions: AtomicU64::new(0),
        }
    }

    /// Get the resource name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquire the resource exclusively on behalf of `holder`
    ///
    /// Waits until the resource is free. The resource is released when the
    /// returned guard is dropped, on every exit path.
    pub async fn acquire(&self, holder: &str) -> ResourceGuard<'_> {
        let permit = self.lock.lock().await;

        let now_held = self.holders.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_holders.fetch_max(now_held, Ordering::SeqCst);
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        *self.holder_slot() = Some(holder.to_string());

        debug!(resource = %self.name, holder = %holder, "Resource acquired");

        ResourceGuard::new(self, permit)
    }

    /// Called by the guard just before the underlying mutex is unlocked
    pub(crate) fn mark_released(&self) {
        let previous = self.holder_slot().take();
        self.holders.fetch_sub(1, Ordering::SeqCst);

        debug!(
            resource = %self.name,
            holder = previous.as_deref().unwrap_or("<unknown>"),
            "Resource released"
        );
    }

    /// Name of the current holder, if any
    pub fn holder(&self) -> Option<String> {
        self.holder_slot().clone()
    }

    /// Current status
    pub fn status(&self) -> ResourceStatus {
        if self.holders.load(Ordering::SeqCst) == 0 {
            ResourceStatus::Free
        } else {
            ResourceStatus::Held
        }
    }

    /// Number of completed acquisitions so far
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneous holders observed (0 or 1)
    pub fn peak_holders(&self) -> usize {
        self.peak_holders.load(Ordering::SeqCst)
    }

    /// Snapshot the counters
    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            name: self.name.clone(),
            acquisitions: self.acquisitions(),
            peak_holders: self.peak_holders(),
        }
    }

    fn holder_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.holder.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for ExclusiveResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_new_resource_is_free() {
        let resource = ExclusiveResource::new("A");

        assert_eq!(resource.name(), "A");
        assert_eq!(resource.status(), ResourceStatus::Free);
        assert_eq!(resource.holder(), None);
        assert_eq!(resource.acquisitions(), 0);
        assert_eq!(resource.peak_holders(), 0);
    }

    #[tokio::test]
    async fn test_acquire_and_release() {
        let resource = ExclusiveResource::new("A");

        {
            let guard = resource.acquire("T1").await;
            assert_eq!(guard.holder(), "T1");
            assert_eq!(resource.status(), ResourceStatus::Held);
            assert_eq!(resource.holder().as_deref(), Some("T1"));
        }

        assert_eq!(resource.status(), ResourceStatus::Free);
        assert_eq!(resource.holder(), None);
        assert_eq!(resource.acquisitions(), 1);
        assert_eq!(resource.peak_holders(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_holder_waits_for_release() {
        let resource = Arc::new(ExclusiveResource::new("A"));
        let guard = resource.acquire("T1").await;

        let waiter = {
            let resource = resource.clone();
            tokio::spawn(async move {
                let _guard = resource.acquire("T2").await;
                resource.holder()
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());
        assert_eq!(resource.holder().as_deref(), Some("T1"));

        drop(guard);

        let seen = waiter.await.unwrap();
        assert_eq!(seen.as_deref(), Some("T2"));
        assert_eq!(resource.acquisitions(), 2);
        assert_eq!(resource.peak_holders(), 1);
    }

    #[tokio::test]
    async fn test_stats_snapshot() {
        let resource = ExclusiveResource::new("B");
        drop(resource.acquire("T1").await);
        drop(resource.acquire("T2").await);

        let stats = resource.stats();
        assert_eq!(
            stats,
            ResourceStats {
                name: "B".to_string(),
                acquisitions: 2,
                peak_holders: 1,
            }
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ResourceStatus::Free.to_string(), "free");
        assert_eq!(ResourceStatus::Held.to_string(), "held");
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(ExclusiveResource::new("A").to_string(), "Resource[A]");
    }
}
