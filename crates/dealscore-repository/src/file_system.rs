//! File system based config store
//!
//! One pretty-printed JSON file per name under a root directory. The JSON
//! shape is the plain serde form of `ScoringConfig`, so files can be
//! inspected and hand-edited; hand-edited files are exactly why loads are
//! validated.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dealscore_core::ScoringConfig;
use tokio::fs;

use crate::error::RepositoryResult;
use crate::traits::{check_name, ConfigStore};

/// File system based named-config store
pub struct FileStore {
    /// Root directory holding `<name>.json` files
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    ///
    /// The directory is created on first save, not here.
    ///
    /// # Example
    /// ```no_run
    /// use dealscore_repository::FileStore;
    ///
    /// let store = FileStore::new("configs");
    /// ```
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        FileStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn load(&self, name: &str) -> RepositoryResult<Option<ScoringConfig>> {
        check_name(name)?;
        let path = self.path_for(name);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let config: ScoringConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(name, path = %path.display(), "config loaded");
        Ok(Some(config))
    }

    async fn save(&self, name: &str, config: &ScoringConfig) -> RepositoryResult<()> {
        check_name(name)?;
        config.validate()?;
        fs::create_dir_all(&self.root).await?;
        let path = self.path_for(name);
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&path, json).await?;
        tracing::debug!(name, path = %path.display(), "config saved");
        Ok(())
    }

    async fn delete(&self, name: &str) -> RepositoryResult<bool> {
        check_name(name)?;
        match fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<String>> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
