//! Localization module.
//!
//! # Module Structure
//!
//! - `language`: The enumerated set of supported languages (`Language`)
//! - `ui_text`: The typed per-language string record (`UiText`)
//! - `tables`: Bundled tables and Stoic quote lists
//!
//! # Usage
//!
//! ```
//! use marcus_core::i18n::Language;
//!
//! let text = Language::English.ui_text();
//! assert_eq!(text.greeting("Cato"), "Greetings, Cato.");
//! ```

mod language;
mod tables;
mod ui_text;

pub use language::Language;
pub use ui_text::{NAME_PLACEHOLDER, UiText, validate_tables};
