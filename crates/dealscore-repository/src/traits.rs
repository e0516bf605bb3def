//! Core trait for named-config storage
//!
//! The engine itself has no knowledge of persistence; the surrounding
//! application stores `ScoringConfig` values under names like
//! `"active"` or `"draft"` through this trait. Payloads are the plain
//! serde JSON of `ScoringConfig`, so any key-value backend works.
//!
//! # Examples
//!
//! ## Basic usage with the file system store
//!
//! ```no_run
//! use dealscore_core::presets;
//! use dealscore_repository::{ConfigStore, FileStore};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let store = FileStore::new("configs");
//!
//! // Persist the editor's saved config under a name
//! store.save("active", &presets::balanced()).await?;
//!
//! // Later sessions load it back, falling back to a preset
//! let config = match store.load("active").await? {
//!     Some(config) => config,
//!     None => presets::balanced(),
//! };
//! # let _ = config;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use dealscore_core::ScoringConfig;

use crate::error::{RepositoryError, RepositoryResult};

/// Read/write named scoring configurations in durable storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load a config by name; `Ok(None)` when the name has never been saved
    ///
    /// Loaded configs are validated before being handed out: a stored
    /// value that violates the structural invariants is a fatal error,
    /// not a silently corrupt calculation waiting to happen.
    async fn load(&self, name: &str) -> RepositoryResult<Option<ScoringConfig>>;

    /// Save a config under a name, replacing any previous value
    async fn save(&self, name: &str, config: &ScoringConfig) -> RepositoryResult<()>;

    /// Delete a named config; returns whether it existed
    async fn delete(&self, name: &str) -> RepositoryResult<bool>;

    /// Names of every stored config
    async fn list(&self) -> RepositoryResult<Vec<String>>;
}

/// Reject names that are empty or could escape a storage namespace
pub(crate) fn check_name(name: &str) -> RepositoryResult<()> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !name.starts_with('.');
    if ok {
        Ok(())
    } else {
        Err(RepositoryError::InvalidName {
            name: name.to_string(),
        })
    }
}
