//! Errors returned by model-service clients.

use thiserror::Error;

/// Failure of a single call to the external model.
///
/// Transport failures carry an `is_retryable` hint; empty and malformed
/// responses never do, since asking again would not change the schema the
/// model ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The request did not complete or the service returned an error status.
    #[error("Model request failed{}: {message}", status_suffix(.status_code))]
    Transport {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// The service answered without any text.
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The text did not match the expected structure.
    #[error("Model response did not match the expected schema: {0}")]
    MalformedResponse(String),

    /// The client cannot be used as configured (e.g. missing API key).
    #[error("Model client misconfigured: {0}")]
    Configuration(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

impl ModelError {
    pub fn transport(message: impl Into<String>, is_retryable: bool) -> Self {
        Self::Transport {
            status_code: None,
            message: message.into(),
            is_retryable,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether repeating the identical request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                is_retryable: true,
                ..
            }
        )
    }

    /// Whether the service answered but broke the response contract.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::EmptyResponse | Self::MalformedResponse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_retryable_transport_is_transient() {
        assert!(ModelError::transport("timeout", true).is_transient());
        assert!(!ModelError::transport("bad key", false).is_transient());
        assert!(!ModelError::EmptyResponse.is_transient());
        assert!(!ModelError::malformed("missing verdict").is_transient());
    }

    #[test]
    fn test_schema_violation_classification() {
        assert!(ModelError::EmptyResponse.is_schema_violation());
        assert!(ModelError::malformed("x").is_schema_violation());
        assert!(!ModelError::configuration("no key").is_schema_violation());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ModelError::Transport {
            status_code: Some(503),
            message: "UNAVAILABLE: overloaded".into(),
            is_retryable: true,
        };
        assert_eq!(
            err.to_string(),
            "Model request failed (503): UNAVAILABLE: overloaded"
        );
        assert_eq!(
            ModelError::transport("connection reset", true).to_string(),
            "Model request failed: connection reset"
        );
    }
}
