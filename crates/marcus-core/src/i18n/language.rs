//! Supported interface languages.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use super::tables;
use super::ui_text::UiText;
use crate::error::{MarcusError, Result};

/// A language the application can be used in.
///
/// The language drives both the UI string table and the language the model is
/// instructed to answer in, so switching it invalidates any model output.
/// Codes are the upper-case two-letter tags used in persisted preferences.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[strum(serialize = "ID")]
    #[serde(rename = "ID")]
    Indonesian,
    #[strum(serialize = "EN")]
    #[serde(rename = "EN")]
    English,
    #[strum(serialize = "JP")]
    #[serde(rename = "JP")]
    Japanese,
    #[strum(serialize = "ES")]
    #[serde(rename = "ES")]
    Spanish,
    #[strum(serialize = "DE")]
    #[serde(rename = "DE")]
    German,
}

impl Language {
    /// Parses a language code, rejecting anything outside the supported set.
    pub fn from_code(code: &str) -> Result<Self> {
        code.trim()
            .parse()
            .map_err(|_| MarcusError::UnsupportedLanguage(code.to_string()))
    }

    /// Iterates the supported languages in menu order.
    pub fn all() -> impl Iterator<Item = Language> {
        Self::iter()
    }

    /// The two-letter code, e.g. `"EN"`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "ID",
            Language::English => "EN",
            Language::Japanese => "JP",
            Language::Spanish => "ES",
            Language::German => "DE",
        }
    }

    /// Name shown in the language menu, written in the language itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Bahasa Indonesia",
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::Spanish => "Español",
            Language::German => "Deutsch",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Indonesian => "🇮🇩",
            Language::English => "🇬🇧",
            Language::Japanese => "🇯🇵",
            Language::Spanish => "🇪🇸",
            Language::German => "🇩🇪",
        }
    }

    /// Name used inside model directives ("answer in ...").
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "BAHASA INDONESIA",
            Language::English => "ENGLISH",
            Language::Japanese => "JAPANESE",
            Language::Spanish => "SPANISH",
            Language::German => "GERMAN",
        }
    }

    /// The full UI string table for this language.
    pub fn ui_text(&self) -> &'static UiText {
        match self {
            Language::Indonesian => &tables::ID_TEXT,
            Language::English => &tables::EN_TEXT,
            Language::Japanese => &tables::JP_TEXT,
            Language::Spanish => &tables::ES_TEXT,
            Language::German => &tables::DE_TEXT,
        }
    }

    /// Stoic quotes shown while an analysis is running.
    pub fn quotes(&self) -> &'static [&'static str] {
        match self {
            Language::Indonesian => tables::ID_QUOTES,
            Language::English => tables::EN_QUOTES,
            Language::Japanese => tables::JP_QUOTES,
            Language::Spanish => tables::ES_QUOTES,
            Language::German => tables::DE_QUOTES,
        }
    }
}
