//! Durable user preferences.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// The two values that survive application restarts.
///
/// The language is stored as its raw code so a hand-edited or outdated file
/// still loads; an unsupported code simply resolves to the default language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Preferences {
    /// The stored language, or `None` when absent or unsupported.
    pub fn stored_language(&self) -> Option<Language> {
        self.language
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
    }

    /// The language to start the session in.
    pub fn resolved_language(&self) -> Language {
        self.stored_language().unwrap_or_default()
    }

    /// The stored name, ignoring blank values.
    pub fn stored_user_name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
