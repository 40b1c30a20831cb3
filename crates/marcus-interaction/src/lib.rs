//! Gemini-backed implementations of the analysis and debate clients.

pub mod analysis_agent;
pub mod debate_agent;
pub mod gemini_api_agent;
pub mod prompts;

use marcus_core::agent::ModelError;
use marcus_core::config::GeminiModelConfig;

pub use crate::analysis_agent::GeminiAnalysisClient;
pub use crate::debate_agent::{GeminiDebateChat, GeminiDebateClient};
pub use crate::gemini_api_agent::GeminiApiAgent;

/// Builds both clients from one API key and the `[gemini]` config section.
pub fn build_clients(
    api_key: &str,
    config: &GeminiModelConfig,
) -> Result<(GeminiAnalysisClient, GeminiDebateClient), ModelError> {
    let analysis_agent = GeminiApiAgent::from_config(api_key, &config.analysis_model, config)?;
    let debate_agent = analysis_agent.clone().with_model(&config.debate_model);

    Ok((
        GeminiAnalysisClient::new(analysis_agent, config.thinking_budget),
        GeminiDebateClient::new(debate_agent),
    ))
}
