//! Config Repository Implementation
//!
//! Persists `AppConfig` as a single JSON document.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use super::traits::ConfigRepository;
use crate::domain::{AppConfig, DomainResult};

pub struct JsonConfigRepository {
    path: PathBuf,
}

impl JsonConfigRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ConfigRepository for JsonConfigRepository {
    async fn load(&self) -> AppConfig {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("could not read {}: {}", self.path.display(), e);
                }
                return AppConfig::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config {}: {}", self.path.display(), e);
            AppConfig::default()
        })
    }

    async fn save(&self, config: &AppConfig) -> DomainResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
