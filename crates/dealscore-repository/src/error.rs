//! Error types for the storage layer

use thiserror::Error;

/// Result type alias for storage operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored config failed structural validation
    #[error("Invalid stored configuration: {0}")]
    InvalidConfig(#[from] dealscore_core::ConfigError),

    /// Config name is not storable (empty or contains path characters)
    #[error("Invalid config name: '{name}'")]
    InvalidName { name: String },
}
