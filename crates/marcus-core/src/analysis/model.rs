//! Stoic analysis result model.

use serde::{Deserialize, Serialize};

use crate::agent::ModelError;

/// The structured outcome of one analysis request.
///
/// All five fields are required on the wire; a response missing any of them
/// is rejected as a whole rather than patched with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoicAnalysis {
    /// Objective statements extracted from the input.
    pub facts: Vec<String>,
    /// Subjective or interpretive statements.
    pub opinions: Vec<String>,
    /// Aspects the user can directly control.
    pub in_control: Vec<String>,
    /// Aspects beyond the user's control.
    pub out_of_control: Vec<String>,
    /// Advisory conclusion.
    pub verdict: String,
}

impl StoicAnalysis {
    /// Parses the JSON text returned by a schema-constrained generation call.
    pub fn from_model_json(text: &str) -> Result<Self, ModelError> {
        if text.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        serde_json::from_str(text).map_err(|err| ModelError::malformed(err.to_string()))
    }
}
