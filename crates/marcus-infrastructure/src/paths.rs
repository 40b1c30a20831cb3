//! Unified path management for Marcus configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/marcus/            # Config directory (platform default)
//! ├── config.toml              # Model and retry settings
//! ├── secret.json              # API keys
//! ├── preferences.toml         # Display name and language
//! └── logs/                    # Application logs
//!     └── marcus.log.YYYY-MM-DD
//! ```
//!
//! The whole tree can be relocated with `--config-dir`, which tests also use
//! to stay out of the real home directory.

use std::path::{Path, PathBuf};

use marcus_core::config::{GeminiConfig, SecretConfig};
use thiserror::Error;

const APP_DIR_NAME: &str = "marcus";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform config directory could not be determined.
    #[error("Cannot find configuration directory")]
    ConfigDirNotFound,
}

/// Resolves every file location from one base directory.
#[derive(Debug, Clone)]
pub struct MarcusPaths {
    base: PathBuf,
}

impl MarcusPaths {
    /// Creates the path set rooted at `base_dir`, or at the platform config
    /// directory (e.g. `~/.config/marcus`) when `None`.
    pub fn new(base_dir: Option<&Path>) -> Result<Self, PathError> {
        let base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR_NAME),
        };
        Ok(Self { base })
    }

    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> PathBuf {
        self.base.join("secret.json")
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.base.join("preferences.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }

    /// Ensures the secret file exists, creating a template with an empty key
    /// if it doesn't. On Unix the file is restricted to mode 600.
    pub fn ensure_secret_file(&self) -> std::io::Result<PathBuf> {
        let secret_path = self.secret_file();
        if secret_path.exists() {
            return Ok(secret_path);
        }

        std::fs::create_dir_all(&self.base)?;

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
            }),
        };
        let template_json = serde_json::to_string_pretty(&template)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}
