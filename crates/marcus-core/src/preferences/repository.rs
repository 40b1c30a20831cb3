//! Preference repository trait.

use crate::error::Result;
use crate::i18n::Language;

use super::model::Preferences;

/// Durable key-value storage for the display name and language.
///
/// Reads happen once at startup; writes happen synchronously on onboarding
/// completion and on language change. There is a single writer, so
/// implementations need no coordination beyond atomic file replacement.
pub trait PreferenceRepository: Send + Sync {
    /// Loads stored preferences; a missing store yields the default value.
    fn load(&self) -> Result<Preferences>;

    fn save_user_name(&self, user_name: &str) -> Result<()>;

    fn save_language(&self, language: Language) -> Result<()>;
}
