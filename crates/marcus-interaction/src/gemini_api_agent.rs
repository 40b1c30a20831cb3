//! GeminiApiAgent - direct REST implementation of `generateContent`.
//!
//! Both the analysis and the debate clients go through this agent. It knows
//! nothing about Stoicism; it only moves [`GenerateContentRequest`]s over HTTP
//! and maps failures onto [`ModelError`].

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use marcus_core::agent::ModelError;
use marcus_core::analysis::ImageAttachment;
use marcus_core::config::{DEFAULT_GEMINI_BASE_URL, GeminiModelConfig};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Agent that talks to one Gemini model over HTTP.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiApiAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiApiAgent")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiApiAgent {
    /// Creates an agent with the default base URL and no request timeout.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Creates an agent for `model` using the transport settings in `config`.
    pub fn from_config(
        api_key: impl Into<String>,
        model: impl Into<String>,
        config: &GeminiModelConfig,
    ) -> Result<Self, ModelError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ModelError::configuration("Gemini API key is empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| {
                ModelError::configuration(format!("Failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
        }
        .with_base_url(&config.base_url))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the agent at another endpoint; a trailing `/` is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `body` and returns the concatenated text of the first candidate.
    ///
    /// An empty string means the model answered without any text; callers
    /// decide whether that is an error.
    pub async fn generate(&self, body: &GenerateContentRequest) -> Result<String, ModelError> {
        // The key is part of the URL, so the URL itself is never logged.
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );
        tracing::debug!(
            model = %self.model,
            turns = body.contents.len(),
            "Sending Gemini request"
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                let is_retryable = err.is_connect() || err.is_timeout();
                ModelError::Transport {
                    status_code: None,
                    message: format!("Gemini API request failed: {}", err.without_url()),
                    is_retryable,
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ModelError::malformed(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        Ok(extract_text_response(parsed))
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// A role-less content block, as used for `systemInstruction`.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &ImageAttachment) -> Self {
        Part::InlineData {
            inline_data: InlineDataPayload {
                mime_type: image.mime_type.clone(),
                data: BASE64_STANDARD.encode(&image.data),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> String {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn map_http_error(status: StatusCode, body: &str) -> ModelError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ModelError::Transport {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::image(&ImageAttachment::jpeg(vec![1, 2, 3])),
                Part::text("hello"),
            ])],
            system_instruction: Some(Content::instruction("be brief")),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".into()),
                response_schema: None,
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: 128,
                }),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"inlineData": {"mimeType": "image/jpeg", "data": "AQID"}},
                        {"text": "hello"}
                    ]
                }],
                "systemInstruction": {"parts": [{"text": "be brief"}]},
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "thinkingConfig": {"thinkingBudget": 128}
                }
            })
        );
    }

    #[test]
    fn test_extract_joins_text_and_skips_thoughts() {
        let parsed = response(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "pondering...", "thought": true},
                        {"text": "{\"verdict\":"},
                        {"text": "\"Endure.\"}"}
                    ]
                }
            }]
        }));
        assert_eq!(extract_text_response(parsed), "{\"verdict\":\"Endure.\"}");
    }

    #[test]
    fn test_extract_without_candidates_is_empty() {
        assert_eq!(extract_text_response(response(json!({}))), "");
        assert_eq!(
            extract_text_response(response(json!({"candidates": [{"finishReason": "SAFETY"}]}))),
            ""
        );
    }

    #[test]
    fn test_map_http_error_uses_error_body() {
        let body = r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#;
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, body);
        assert_eq!(
            err,
            ModelError::Transport {
                status_code: Some(503),
                message: "UNAVAILABLE: The model is overloaded.".into(),
                is_retryable: true,
            }
        );
    }

    #[test]
    fn test_map_http_error_client_errors_are_final() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "plain text body");
        assert!(!err.is_transient());
        assert!(err.to_string().contains("plain text body"));
    }

    #[test]
    fn test_from_config_rejects_blank_key() {
        let err = GeminiApiAgent::from_config("  ", "m", &GeminiModelConfig::default()).unwrap_err();
        assert!(matches!(err, ModelError::Configuration(_)));
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = GeminiModelConfig {
            base_url: "http://127.0.0.1:9/models/".into(),
            ..GeminiModelConfig::default()
        };
        let agent = GeminiApiAgent::from_config("key", "gemini-test", &config).unwrap();
        assert_eq!(agent.base_url, "http://127.0.0.1:9/models");

        let agent = agent.with_base_url("http://localhost:8080");
        assert_eq!(agent.base_url, "http://localhost:8080");
        assert_eq!(agent.model(), "gemini-test");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let agent = GeminiApiAgent::new("super-secret", "gemini-test");
        let rendered = format!("{agent:?}");
        assert!(rendered.contains("gemini-test"));
        assert!(!rendered.contains("super-secret"));
    }
}
