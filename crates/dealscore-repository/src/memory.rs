//! In-memory config store
//!
//! Backs tests and single-process embedding; same contract as the durable
//! stores, including validation on save.

use std::collections::HashMap;

use async_trait::async_trait;
use dealscore_core::ScoringConfig;
use tokio::sync::RwLock;

use crate::error::RepositoryResult;
use crate::traits::{check_name, ConfigStore};

/// In-memory named-config store
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, ScoringConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load(&self, name: &str) -> RepositoryResult<Option<ScoringConfig>> {
        check_name(name)?;
        Ok(self.entries.read().await.get(name).cloned())
    }

    async fn save(&self, name: &str, config: &ScoringConfig) -> RepositoryResult<()> {
        check_name(name)?;
        config.validate()?;
        self.entries
            .write()
            .await
            .insert(name.to_string(), config.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> RepositoryResult<bool> {
        check_name(name)?;
        Ok(self.entries.write().await.remove(name).is_some())
    }

    async fn list(&self) -> RepositoryResult<Vec<String>> {
        let mut names: Vec<String> = self.entries.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
