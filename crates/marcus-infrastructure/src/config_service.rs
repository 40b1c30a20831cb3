//! Configuration service implementation.
//!
//! Loads `config.toml` and caches the result. A missing file is created with
//! the defaults so users have something to edit.

use std::sync::{Arc, RwLock};

use marcus_core::MarcusError;
use marcus_core::config::RootConfig;
use marcus_core::error::Result;

use crate::paths::MarcusPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// Configuration service that loads and caches the root configuration.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<RootConfig>>,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &MarcusPaths) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(paths.config_file())),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    /// A malformed file is reported as [`MarcusError::Config`].
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        match self.file.load() {
            Ok(Some(config)) => Ok(config),
            Ok(None) => {
                let config = RootConfig::default();
                if let Err(e) = self.file.save(&config) {
                    // Defaults still apply; only the template is missing.
                    tracing::warn!(
                        path = %self.file.path().display(),
                        "Failed to write default config: {}",
                        e
                    );
                } else {
                    tracing::info!(path = %self.file.path().display(), "Created default config");
                }
                Ok(config)
            }
            Err(AtomicTomlError::Parse(e)) => Err(MarcusError::config(format!(
                "{} is not valid: {}",
                self.file.path().display(),
                e
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
