//! Debate client: a stateful chat replayed against `generateContent`.

use std::sync::Arc;

use async_trait::async_trait;
use marcus_core::agent::{DebateChat, DebateClient, DebateSeed, ModelError, SILENT_REPLY};
use tokio::sync::Mutex;

use crate::gemini_api_agent::{Content, GeminiApiAgent, GenerateContentRequest, Part};
use crate::prompts;

/// [`DebateClient`] that opens Gemini chats.
#[derive(Debug, Clone)]
pub struct GeminiDebateClient {
    agent: GeminiApiAgent,
}

impl GeminiDebateClient {
    pub fn new(agent: GeminiApiAgent) -> Self {
        Self { agent }
    }
}

impl DebateClient for GeminiDebateClient {
    fn open_chat(&self, seed: DebateSeed) -> Arc<dyn DebateChat> {
        tracing::info!(
            model = self.agent.model(),
            language = seed.language.code(),
            "Opening debate chat"
        );
        let directive = prompts::debate_directive(&seed.user_name, &seed.context, seed.language);
        Arc::new(GeminiDebateChat::new(self.agent.clone(), directive))
    }
}

/// One debate conversation.
///
/// The history holds only completed turns; a turn whose request fails is
/// dropped so the next message is sent against the same history.
pub struct GeminiDebateChat {
    agent: GeminiApiAgent,
    directive: Result<String, ModelError>,
    history: Mutex<Vec<Content>>,
}

impl GeminiDebateChat {
    fn new(agent: GeminiApiAgent, directive: Result<String, ModelError>) -> Self {
        if let Err(err) = &directive {
            tracing::error!("Debate directive could not be rendered: {}", err);
        }
        Self {
            agent,
            directive,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed turns (user and model messages).
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}

/// Builds the request for the next turn from the completed history.
pub fn build_turn_request(
    directive: &str,
    history: &[Content],
    message: &str,
) -> GenerateContentRequest {
    let mut contents = history.to_vec();
    contents.push(Content::user(vec![Part::text(message)]));

    GenerateContentRequest {
        contents,
        system_instruction: Some(Content::instruction(directive)),
        generation_config: None,
    }
}

#[async_trait]
impl DebateChat for GeminiDebateChat {
    async fn send(&self, message: &str) -> Result<String, ModelError> {
        let directive = self.directive.as_ref().map_err(|err| err.clone())?;

        // Held across the request so turns complete in send order.
        let mut history = self.history.lock().await;
        let body = build_turn_request(directive, &history, message);

        let reply = self.agent.generate(&body).await?;
        let reply = if reply.trim().is_empty() {
            tracing::warn!("Debate model returned no text");
            SILENT_REPLY.to_string()
        } else {
            reply
        };

        history.push(Content::user(vec![Part::text(message)]));
        history.push(Content::model(reply.clone()));
        Ok(reply)
    }
}
