//! Secret service implementation.
//!
//! Loads the Gemini API key from `secret.json`. A key exported through
//! `GEMINI_API_KEY` (or the shorter `API_KEY`) takes precedence over the file.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use marcus_core::config::{GeminiConfig, SecretConfig};
use marcus_core::error::Result;
use marcus_core::secret::SecretService;

use crate::paths::MarcusPaths;

/// Environment variables checked for an API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Reads the first non-blank API key from the environment.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Service for loading secret configuration.
///
/// The file is read once and cached.
///
/// # Example
///
/// ```ignore
/// use marcus_infrastructure::{MarcusPaths, SecretServiceImpl};
/// use marcus_core::secret::SecretService;
///
/// let paths = MarcusPaths::new(None)?;
/// let service = SecretServiceImpl::new(&paths);
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    env_api_key: Option<String>,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    pub fn new(paths: &MarcusPaths) -> Self {
        Self::with_env_override(paths.secret_file(), api_key_from_env())
    }

    /// Creates a service for an explicit file and environment key.
    pub fn with_env_override(path: PathBuf, env_api_key: Option<String>) -> Self {
        Self {
            path,
            env_api_key,
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No secret file found");
            return Ok(SecretConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig> {
        {
            let cached = self.secrets.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref secrets) = *cached {
                return Ok(secrets.clone());
            }
        }

        let mut loaded = self.read_file()?;
        if let Some(api_key) = &self.env_api_key {
            tracing::debug!("Using Gemini API key from environment");
            loaded.gemini = Some(GeminiConfig {
                api_key: api_key.clone(),
            });
        }

        let mut cached = self.secrets.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
