//! Read-only session views handed to screens.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use super::screen::Screen;
use crate::analysis::StoicAnalysis;
use crate::i18n::Language;

/// State of the debate sub-session as seen by the debate screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebateSnapshot {
    pub messages: Vec<ChatMessage>,
    /// A turn is in flight; sending is disabled until it resolves.
    pub is_typing: bool,
}

/// Immutable copy of the session, produced by the controller after every
/// change. Screens render from this and never mutate the session directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub user_name: Option<String>,
    pub language: Language,
    pub analysis: Option<StoicAnalysis>,
    pub situation_context: String,
    /// Pending user-visible notice (e.g. the analysis failure message).
    pub notification: Option<String>,
    pub debate: Option<DebateSnapshot>,
}
