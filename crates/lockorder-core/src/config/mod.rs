//! Demo configuration
//!
//! Built in code only: the demo reads no files and no environment.

use crate::domain::locking::DEFAULT_DELAY;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Upper bound on the simulated delay
pub const MAX_DELAY: Duration = Duration::from_secs(60);

/// Configuration of a demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Worker names, in spawn order
    pub workers: Vec<String>,
    /// Simulated work while holding the first resource
    pub delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            workers: vec!["T1".to_string(), "T2".to_string()],
            delay: DEFAULT_DELAY,
        }
    }
}

impl DemoConfig {
    /// Replace the worker names
    pub fn with_workers<I, S>(mut self, workers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workers = workers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check that the run can start
    pub fn validate(&self) -> Result<()> {
        if self.workers.is_empty() {
            return Err(Error::InvalidConfig("at least one worker is required".to_string()));
        }

        let mut seen = HashSet::new();
        for name in &self.workers {
            if name.trim().is_empty() {
                return Err(Error::InvalidConfig("worker names must not be blank".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidConfig(format!("duplicate worker name '{}'", name)));
            }
        }

        if self.delay > MAX_DELAY {
            return Err(Error::InvalidConfig(format!(
                "delay of {}ms exceeds the {}s limit",
                self.delay.as_millis(),
                MAX_DELAY.as_secs()
            )));
        }

        Ok(())
    }
}
