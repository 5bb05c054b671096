use thiserror::Error;

/// Errors handed to everyone waiting on a committee fetch.
///
/// Cloneable because one shared fetch reports the same failure to every
/// waiter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Committee fetch failed: {0}")]
    Fetch(String),
    #[error("Committee fetch task failed: {0}")]
    TaskFailed(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
