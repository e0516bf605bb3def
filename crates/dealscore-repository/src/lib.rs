//! Dealscore Repository - Durable named-config storage
//!
//! The scoring engine consumes and produces plain `ScoringConfig` values
//! and has no knowledge of where they live between sessions. This crate
//! is the storage collaborator: a key-value [`ConfigStore`] trait with
//! in-memory and file-system implementations.

pub mod error;
pub mod file_system;
pub mod memory;
pub mod traits;

// Re-export main types
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileStore;
pub use memory::MemoryStore;
pub use traits::ConfigStore;
