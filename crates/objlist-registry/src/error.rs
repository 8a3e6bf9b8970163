//! Error types for the registry crate.

use objlist_groups::GroupError;

/// Errors from registry queries and provider updates.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Index translation or group lookup failed.
    #[error("group error: {0}")]
    Group(#[from] GroupError),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for registry results.
pub type RegistryResult<T> = Result<T, RegistryError>;
