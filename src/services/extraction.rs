//! Parsing of chat-model replies into typed parameters.
//!
//! Two explicit steps: strip markdown fence decoration, then parse. The
//! error distinguishes "not JSON at all" from "JSON that doesn't match the
//! documented schema" so callers can log the difference, but both feed the
//! same per-intent fallback policy.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("reply does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

/// Remove ``` and ```json markers wherever they appear and trim whitespace.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strip fences and parse the reply into `T`.
pub fn extract<T: DeserializeOwned>(reply: &str) -> Result<T, ExtractionError> {
    let cleaned = strip_code_fences(reply);
    let value: serde_json::Value = serde_json::from_str(&cleaned)
        .map_err(|err| ExtractionError::InvalidJson(err.to_string()))?;
    serde_json::from_value(value).map_err(|err| ExtractionError::SchemaMismatch(err.to_string()))
}
