//! Result envelopes returned by the action services and the dispatcher.
//!
//! Every public operation resolves to one of these shapes; failures are data,
//! never propagated errors. An `ActionReport` carries exactly one of
//! `answer` or `error`, and always a timestamp.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Intent;

/// How the original text is echoed back in the envelope: queries answer a
/// `question`, creations and updates act on a `request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Question,
    Request,
}

impl InputKind {
    fn key(self) -> &'static str {
        match self {
            InputKind::Question => "question",
            InputKind::Request => "request",
        }
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    /// The pipeline ran to execution: the raw model interpretation plus the
    /// backend's response (which may itself be an `{"error": ...}` mapping).
    Answered { interpretation: Value, answer: Value },
    /// The pipeline stopped before or during execution.
    Failed { error: String },
}

/// The envelope produced by one action service call.
#[derive(Debug, Clone)]
pub struct ActionReport {
    kind: InputKind,
    input: String,
    outcome: Outcome,
    timestamp: DateTime<Utc>,
}

impl ActionReport {
    pub fn answered(
        kind: InputKind,
        input: impl Into<String>,
        interpretation: impl Into<Value>,
        answer: Value,
    ) -> Self {
        Self {
            kind,
            input: input.into(),
            outcome: Outcome::Answered {
                interpretation: interpretation.into(),
                answer,
            },
            timestamp: Utc::now(),
        }
    }

    pub fn failed(kind: InputKind, input: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            outcome: Outcome::Failed {
                error: error.into(),
            },
            timestamp: Utc::now(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn answer(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Answered { answer, .. } => Some(answer),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            Outcome::Answered { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Serialize for ActionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(self.kind.key(), &self.input)?;
        match &self.outcome {
            Outcome::Answered {
                interpretation,
                answer,
            } => {
                map.serialize_entry("interpretation", interpretation)?;
                map.serialize_entry("answer", answer)?;
            }
            Outcome::Failed { error } => {
                map.serialize_entry("error", error)?;
            }
        }
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.end()
    }
}

/// Fixed guidance returned when no intent could be determined.
pub const UNKNOWN_INTENT_ERROR: &str =
    "Could not determine intent. Please specify if you want to query, create, or update tickets.";
pub const UNKNOWN_INTENT_SUGGESTION: &str = "Try phrases like 'Show me tickets...' for queries, \
     'Create a ticket...' for creation, or 'Update ABC-123...' for updates";

/// The outward-facing envelope of one dispatch call.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchEnvelope {
    pub user_input: String,
    pub detected_intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira_response: Option<ActionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DispatchEnvelope {
    /// Envelope for a request that was routed to an action service.
    pub fn routed(user_input: impl Into<String>, intent: Intent, report: ActionReport) -> Self {
        Self {
            user_input: user_input.into(),
            detected_intent: intent,
            jira_response: Some(report),
            error: None,
            suggestion: None,
            timestamp: Utc::now(),
        }
    }

    /// Envelope for a request whose intent could not be determined.
    pub fn unknown(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            detected_intent: Intent::Unknown,
            jira_response: None,
            error: Some(UNKNOWN_INTENT_ERROR.to_string()),
            suggestion: Some(UNKNOWN_INTENT_SUGGESTION.to_string()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answered_report_carries_answer_not_error() {
        let report = ActionReport::answered(
            InputKind::Question,
            "show tickets",
            "{}",
            json!({"issues": []}),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["question"], "show tickets");
        assert!(value.get("answer").is_some());
        assert!(value.get("error").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn failed_report_carries_error_not_answer() {
        let report = ActionReport::failed(InputKind::Request, "create it", "no can do");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["request"], "create it");
        assert_eq!(value["error"], "no can do");
        assert!(value.get("answer").is_none());
        assert!(value.get("interpretation").is_none());
    }

    #[test]
    fn unknown_envelope_includes_guidance() {
        let envelope = DispatchEnvelope::unknown("asdkjasd");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["detected_intent"], "unknown");
        assert!(value["error"].as_str().unwrap().contains("Could not determine intent"));
        assert!(value["suggestion"].as_str().unwrap().contains("Show me tickets"));
        assert!(value.get("jira_response").is_none());
    }
}
