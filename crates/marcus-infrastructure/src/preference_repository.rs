//! TOML-backed preference repository.

use std::path::PathBuf;

use marcus_core::error::Result;
use marcus_core::i18n::Language;
use marcus_core::preferences::{PreferenceRepository, Preferences};

use crate::paths::MarcusPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// Stores [`Preferences`] in `preferences.toml`.
///
/// A file that cannot be parsed is treated like a missing one: the session
/// starts with defaults and the next write replaces it.
pub struct TomlPreferenceRepository {
    file: AtomicTomlFile<Preferences>,
}

impl TomlPreferenceRepository {
    pub fn new(paths: &MarcusPaths) -> Self {
        Self::with_path(paths.preferences_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl PreferenceRepository for TomlPreferenceRepository {
    fn load(&self) -> Result<Preferences> {
        let preferences = match self.file.load() {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(AtomicTomlError::Parse(e)) => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    "Ignoring unreadable preferences: {}",
                    e
                );
                Preferences::default()
            }
            Err(e) => return Err(e.into()),
        };

        if preferences.language.is_some() && preferences.stored_language().is_none() {
            tracing::warn!(
                code = preferences.language.as_deref().unwrap_or_default(),
                "Stored language is not supported; using default"
            );
        }

        Ok(preferences)
    }

    fn save_user_name(&self, user_name: &str) -> Result<()> {
        tracing::debug!("Persisting user name");
        self.file
            .update(Preferences::default(), |prefs| {
                prefs.user_name = Some(user_name.to_string());
            })
            .map_err(Into::into)
    }

    fn save_language(&self, language: Language) -> Result<()> {
        tracing::debug!(language = language.code(), "Persisting language");
        self.file
            .update(Preferences::default(), |prefs| {
                prefs.language = Some(language.code().to_string());
            })
            .map_err(Into::into)
    }
}
