//! Configuration models.
//!
//! `RootConfig` mirrors `config.toml` and `SecretConfig` mirrors `secret.json`.
//! Every field has a default so a partial or missing file is valid.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_DEBATE_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_THINKING_BUDGET: u32 = 32768;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub gemini: GeminiModelConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Model selection and transport settings for Gemini.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeminiModelConfig {
    pub analysis_model: String,
    pub debate_model: String,
    pub base_url: String,
    /// Thinking budget for analysis calls; `0` disables the thinking config.
    pub thinking_budget: u32,
    pub request_timeout_secs: u64,
}

impl Default for GeminiModelConfig {
    fn default() -> Self {
        Self {
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            debate_model: DEFAULT_DEBATE_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Failure policy for analysis requests.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Total attempts per submission. Only transient transport failures are
    /// retried; schema violations always fail on the first attempt.
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            retry_delay_ms: 1000,
        }
    }
}

/// Root of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
}

impl SecretConfig {
    /// The Gemini key, if one is configured and non-blank.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|gemini| gemini.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}
