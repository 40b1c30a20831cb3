//! Logging setup.
//!
//! The REPL owns stdout, so logs go to a daily rolling file under the config
//! directory instead.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "marcus.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive: an explicit `--log-level`, then `RUST_LOG`,
/// then [`DEFAULT_LOG_LEVEL`].
pub fn resolve_filter(cli_level: Option<&str>, env_value: Option<&str>) -> String {
    let non_blank = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    cli_level
        .and_then(non_blank)
        .or_else(|| env_value.and_then(non_blank))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered lines are lost.
pub fn init(logs_dir: &Path, cli_level: Option<&str>) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Cannot create log directory {}", logs_dir.display()))?;

    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_filter(cli_level, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialise logging: {err}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn test_env_then_default() {
        assert_eq!(resolve_filter(None, Some("marcus=trace")), "marcus=trace");
        assert_eq!(resolve_filter(None, None), DEFAULT_LOG_LEVEL);
        assert_eq!(resolve_filter(Some("  "), None), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_blank_cli_level_falls_through_to_env() {
        assert_eq!(resolve_filter(Some(""), Some("warn")), "warn");
        assert_eq!(resolve_filter(Some(" "), Some("  ")), DEFAULT_LOG_LEVEL);
    }
}
