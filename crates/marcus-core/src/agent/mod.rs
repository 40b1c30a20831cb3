//! Model-service client interfaces.
//!
//! The application never talks to the external model directly; it goes through
//! these traits so that the session controller can be driven by fakes in tests
//! and by the Gemini implementations in `marcus-interaction` at runtime.

mod error;

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::{AnalysisRequest, StoicAnalysis};
use crate::i18n::Language;

pub use error::ModelError;

/// Reply used when the model answers a debate turn with no text.
pub const SILENT_REPLY: &str = "Marcus diam.";

/// Single-shot structured analysis.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Produces a complete analysis or fails. Exactly one attempt.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<StoicAnalysis, ModelError>;
}

/// Parameters for opening a debate conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateSeed {
    pub user_name: String,
    /// Situation plus rendered prior analysis.
    pub context: String,
    pub language: Language,
}

/// Factory for stateful debate conversations.
pub trait DebateClient: Send + Sync {
    fn open_chat(&self, seed: DebateSeed) -> Arc<dyn DebateChat>;
}

/// One open conversation with the persona.
///
/// Implementations keep their own turn history; a failed call must leave the
/// history as it was so the next turn can proceed.
#[async_trait]
pub trait DebateChat: Send + Sync {
    /// Sends one user message and returns the persona's reply.
    async fn send(&self, message: &str) -> Result<String, ModelError>;
}
