//! Wires configuration, storage and the Gemini clients into a controller.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use marcus_application::{RetryPolicy, SessionController};
use marcus_core::i18n::validate_tables;
use marcus_core::secret::SecretService;
use marcus_infrastructure::{ConfigService, MarcusPaths, SecretServiceImpl, TomlPreferenceRepository};

pub async fn build_controller(paths: &MarcusPaths) -> Result<SessionController> {
    validate_tables().context("Localization tables are incomplete")?;

    let config = ConfigService::new(paths)
        .get_config()
        .context("Failed to load config.toml")?;

    let secret_service = SecretServiceImpl::new(paths);
    if !secret_service.secret_file_exists().await {
        let created = paths
            .ensure_secret_file()
            .context("Failed to create secret.json")?;
        tracing::info!(path = %created.display(), "Created secret template");
    }

    let secrets = secret_service
        .load_secrets()
        .await
        .context("Failed to load secret.json")?;
    let Some(api_key) = secrets.gemini_api_key() else {
        bail!(
            "No Gemini API key found. Set GEMINI_API_KEY or add it to {}",
            paths.secret_file().display()
        );
    };

    let (analysis_client, debate_client) =
        marcus_interaction::build_clients(api_key, &config.gemini)
            .context("Failed to set up Gemini clients")?;

    tracing::info!(
        analysis_model = %config.gemini.analysis_model,
        debate_model = %config.gemini.debate_model,
        max_attempts = config.analysis.max_attempts,
        "Clients ready"
    );

    let controller = SessionController::new(
        Arc::new(analysis_client),
        Arc::new(debate_client),
        Arc::new(TomlPreferenceRepository::new(paths)),
    )
    .with_retry_policy(RetryPolicy::from(&config.analysis));

    Ok(controller)
}
