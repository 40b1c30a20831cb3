use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use marcus_infrastructure::MarcusPaths;

mod app;
mod bootstrap;
mod commands;
mod draft;
mod helper;
mod logging;
mod screens;

#[derive(Parser, Debug)]
#[command(name = "marcus")]
#[command(about = "Marcus - Stoic reflection and debate in the terminal", long_about = None)]
struct Cli {
    /// Directory holding config.toml, secret.json and preferences (default: ~/.config/marcus)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Interface language for this run (ID, EN, JP, ES, DE); persisted like /lang
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Log filter directive, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MarcusPaths::new(cli.config_dir.as_deref()).context("Cannot resolve config directory")?;
    let _log_guard = logging::init(&paths.logs_dir(), cli.log_level.as_deref())?;
    tracing::info!(config_dir = %paths.config_dir().display(), "Starting marcus");

    let mut controller = bootstrap::build_controller(&paths).await?;
    if let Some(code) = cli.lang.as_deref() {
        controller
            .change_language_code(code)
            .with_context(|| format!("Cannot switch to language '{code}'"))?;
    }

    let mut app = app::App::new(controller)?;
    let outcome = app.run().await;
    if let Err(err) = &outcome {
        tracing::error!("Session aborted: {:#}", err);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "marcus",
            "--config-dir",
            "/tmp/marcus",
            "--lang",
            "jp",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/marcus")));
        assert_eq!(cli.lang.as_deref(), Some("jp"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_flags_are_optional() {
        let cli = Cli::try_parse_from(["marcus"]).unwrap();
        assert!(cli.config_dir.is_none());
        assert!(cli.lang.is_none());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["marcus", "--model", "x"]).is_err());
    }
}
