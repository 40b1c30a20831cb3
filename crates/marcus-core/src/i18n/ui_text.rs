//! Typed UI string table.

use super::language::Language;
use crate::error::{MarcusError, Result};

/// Placeholder replaced with the user's display name in greetings.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Every user-facing string of the interface for one language.
///
/// Tables are plain struct literals, so a language that forgets a key fails to
/// compile. [`validate_tables`] additionally rejects blank entries at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiText {
    pub splash_sub: &'static str,
    pub onboarding_title: &'static str,
    pub onboarding_desc: &'static str,
    pub name_label: &'static str,
    pub start_btn: &'static str,
    /// Contains [`NAME_PLACEHOLDER`].
    pub dashboard_greeting: &'static str,
    pub dashboard_prompt: &'static str,
    pub input_placeholder: &'static str,
    pub img_attached: &'static str,
    pub analyze_btn: &'static str,
    pub worst_case_btn: &'static str,
    pub loading: &'static str,
    pub result_title: &'static str,
    pub filter_title: &'static str,
    pub facts: &'static str,
    pub opinions: &'static str,
    pub dichotomy_title: &'static str,
    pub in_control: &'static str,
    pub out_control: &'static str,
    pub verdict_title: &'static str,
    pub debate_btn: &'static str,
    pub done_btn: &'static str,
    pub debate_header: &'static str,
    pub debate_online: &'static str,
    pub debate_init: &'static str,
    pub debate_placeholder: &'static str,
    pub debate_end: &'static str,
    pub send_message: &'static str,
    pub language_menu_title: &'static str,
    pub language_reset_notice: &'static str,
    pub error: &'static str,
}

impl UiText {
    /// Dashboard greeting with the user's name substituted.
    pub fn greeting(&self, name: &str) -> String {
        self.dashboard_greeting.replace(NAME_PLACEHOLDER, name)
    }

    fn entries(&self) -> [(&'static str, &'static str); 31] {
        [
            ("splash_sub", self.splash_sub),
            ("onboarding_title", self.onboarding_title),
            ("onboarding_desc", self.onboarding_desc),
            ("name_label", self.name_label),
            ("start_btn", self.start_btn),
            ("dashboard_greeting", self.dashboard_greeting),
            ("dashboard_prompt", self.dashboard_prompt),
            ("input_placeholder", self.input_placeholder),
            ("img_attached", self.img_attached),
            ("analyze_btn", self.analyze_btn),
            ("worst_case_btn", self.worst_case_btn),
            ("loading", self.loading),
            ("result_title", self.result_title),
            ("filter_title", self.filter_title),
            ("facts", self.facts),
            ("opinions", self.opinions),
            ("dichotomy_title", self.dichotomy_title),
            ("in_control", self.in_control),
            ("out_control", self.out_control),
            ("verdict_title", self.verdict_title),
            ("debate_btn", self.debate_btn),
            ("done_btn", self.done_btn),
            ("debate_header", self.debate_header),
            ("debate_online", self.debate_online),
            ("debate_init", self.debate_init),
            ("debate_placeholder", self.debate_placeholder),
            ("debate_end", self.debate_end),
            ("send_message", self.send_message),
            ("language_menu_title", self.language_menu_title),
            ("language_reset_notice", self.language_reset_notice),
            ("error", self.error),
        ]
    }

    fn validate(&self, language: Language) -> Result<()> {
        for (key, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(MarcusError::Localization(format!(
                    "{}: '{}' is empty",
                    language.code(),
                    key
                )));
            }
        }
        if !self.dashboard_greeting.contains(NAME_PLACEHOLDER) {
            return Err(MarcusError::Localization(format!(
                "{}: 'dashboard_greeting' lacks {}",
                language.code(),
                NAME_PLACEHOLDER
            )));
        }
        Ok(())
    }
}

/// Checks every language table and quote list.
///
/// Called once at startup; a failure here is a packaging bug.
pub fn validate_tables() -> Result<()> {
    for language in Language::all() {
        language.ui_text().validate(language)?;

        let quotes = language.quotes();
        if quotes.is_empty() || quotes.iter().any(|q| q.trim().is_empty()) {
            return Err(MarcusError::Localization(format!(
                "{}: quote list is empty or has blank entries",
                language.code()
            )));
        }
    }
    Ok(())
}
