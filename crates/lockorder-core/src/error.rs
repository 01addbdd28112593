//! Error types for lockorder

use thiserror::Error;

/// Result type alias using lockorder's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Lockorder error types
///
/// The acquisition protocol itself never fails: lock acquisition blocks until
/// it succeeds and interrupts are absorbed. These variants cover the harness
/// around it.
#[derive(Error, Debug)]
pub enum Error {
    // Config errors (E100-E199)
    #[error("Invalid demo configuration: {0}")]
    InvalidConfig(String),

    // Worker errors (E200-E299)
    #[error("Worker '{worker}' panicked: {message}")]
    WorkerPanicked { worker: String, message: String },

    #[error("Worker '{0}' was cancelled before it finished")]
    WorkerCancelled(String),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E100",
            Self::WorkerPanicked { .. } => "E200",
            Self::WorkerCancelled(_) => "E201",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidConfig(_) => {
                Some("Give every worker a unique, non-empty name".to_string())
            }
            Self::WorkerPanicked { .. } => Some("Run with RUST_LOG=lockorder=debug".to_string()),
            Self::WorkerCancelled(_) => None,
        }
    }

    /// Build a worker error from a failed tokio join
    pub(crate) fn from_join(worker: &str, err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            return Self::WorkerCancelled(worker.to_string());
        }

        let payload = err.into_panic();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());

        Self::WorkerPanicked {
            worker: worker.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_error() {
        let error = Error::InvalidConfig("duplicate worker name 'T1'".to_string());
        assert_eq!(error.code(), "E100");
        assert!(error.suggestion().is_some());
        assert!(error.to_string().contains("duplicate worker name"));
    }

    #[test]
    fn test_worker_panicked_error() {
        let error = Error::WorkerPanicked {
            worker: "T1".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(error.code(), "E200");
        assert_eq!(error.to_string(), "Worker 'T1' panicked: boom");
    }

    #[test]
    fn test_worker_cancelled_error() {
        let error = Error::WorkerCancelled("T2".to_string());
        assert_eq!(error.code(), "E201");
        assert_eq!(error.suggestion(), None);
    }

    #[tokio::test]
    async fn test_from_join_panic() {
        let handle = tokio::spawn(async {
            panic!("worker exploded");
        });
        let err = handle.await.unwrap_err();

        match Error::from_join("T1", err) {
            Error::WorkerPanicked { worker, message } => {
                assert_eq!(worker, "T1");
                assert_eq!(message, "worker exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_from_join_cancelled() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        });
        handle.abort();
        let err = handle.await.unwrap_err();

        assert!(matches!(Error::from_join("T2", err), Error::WorkerCancelled(w) if w == "T2"));
    }
}
