//! Debate message types.

use serde::{Deserialize, Serialize};

/// Who wrote a debate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Model,
}

/// A single message in a debate sub-session.
///
/// Ids are unique within one sub-session and strictly increasing in send
/// order; the opening greeting is always id 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: MessageRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn model(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::Model,
            text: text.into(),
        }
    }
}
