//! Analysis client: one structured `generateContent` call per submission.

use async_trait::async_trait;
use marcus_core::agent::{AnalysisClient, ModelError};
use marcus_core::analysis::{AnalysisRequest, StoicAnalysis};
use serde_json::json;

use crate::gemini_api_agent::{
    Content, GeminiApiAgent, GenerateContentRequest, GenerationConfig, Part, ThinkingConfig,
};
use crate::prompts::{self, IMAGE_ONLY_PROMPT};

/// JSON schema the model must fill. All five fields are required.
pub fn analysis_response_schema() -> serde_json::Value {
    let string_list = |description: &str| {
        json!({
            "type": "ARRAY",
            "items": { "type": "STRING" },
            "description": description,
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "facts": string_list("Objective facts of the situation, free of judgement."),
            "opinions": string_list("Judgements and impressions the user added to the facts."),
            "inControl": string_list("What lies within the user's control."),
            "outOfControl": string_list("What lies outside the user's control."),
            "verdict": {
                "type": "STRING",
                "description": "One direct Stoic verdict.",
            },
        },
        "required": ["facts", "opinions", "inControl", "outOfControl", "verdict"],
    })
}

/// [`AnalysisClient`] backed by Gemini structured output.
#[derive(Debug, Clone)]
pub struct GeminiAnalysisClient {
    agent: GeminiApiAgent,
    thinking_budget: u32,
}

impl GeminiAnalysisClient {
    /// `thinking_budget` of `0` omits the thinking config entirely.
    pub fn new(agent: GeminiApiAgent, thinking_budget: u32) -> Self {
        Self {
            agent,
            thinking_budget,
        }
    }

    /// Builds the wire request for `request` without sending it.
    pub fn build_request(
        &self,
        request: &AnalysisRequest,
    ) -> Result<GenerateContentRequest, ModelError> {
        let input = &request.input;

        let mut parts = Vec::new();
        if let Some(image) = input.image.as_ref().filter(|image| !image.is_empty()) {
            parts.push(Part::image(image));
        }
        let text = input.text.trim();
        if !text.is_empty() {
            parts.push(Part::text(text));
        } else if !parts.is_empty() {
            parts.push(Part::text(IMAGE_ONLY_PROMPT));
        }

        if parts.is_empty() {
            return Err(ModelError::configuration(
                "Analysis request must include text or an image",
            ));
        }

        let directive =
            prompts::analysis_directive(&request.user_name, request.language, input.worst_case)?;

        Ok(GenerateContentRequest {
            contents: vec![Content::user(parts)],
            system_instruction: Some(Content::instruction(directive)),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(analysis_response_schema()),
                thinking_config: (self.thinking_budget > 0).then(|| ThinkingConfig {
                    thinking_budget: self.thinking_budget,
                }),
            }),
        })
    }
}

#[async_trait]
impl AnalysisClient for GeminiAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<StoicAnalysis, ModelError> {
        let body = self.build_request(request)?;
        tracing::info!(
            model = self.agent.model(),
            language = request.language.code(),
            worst_case = request.input.worst_case,
            has_image = request.input.image.is_some(),
            "Requesting Stoic analysis"
        );

        let text = self.agent.generate(&body).await?;
        let analysis = StoicAnalysis::from_model_json(&text)?;

        tracing::debug!(
            facts = analysis.facts.len(),
            opinions = analysis.opinions.len(),
            "Analysis parsed"
        );
        Ok(analysis)
    }
}
