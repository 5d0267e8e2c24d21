//! Two-stage intent classification: chat model first, patterns second.
//!
//! The model handles open-ended phrasing; the pattern stage is the
//! deterministic, zero-latency net underneath it, so an unavailable or
//! non-compliant model degrades the pipeline instead of failing it.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::domain::models::Intent;
use crate::domain::ports::ChatClient;
use crate::services::prompts;

/// Result of the chat-model stage.
///
/// `Unavailable` is a deliberate branch, not a swallowed error: tests can
/// drive it with a failing client and assert the pattern fallback runs.
#[derive(Debug, PartialEq, Eq)]
enum LlmStage {
    Classified(Intent),
    Unavailable,
}

pub struct IntentClassifier {
    chat: Arc<dyn ChatClient>,
}

impl IntentClassifier {
    pub fn new(chat: Arc<dyn ChatClient>) -> Self {
        Self { chat }
    }

    /// Classify free text as query, create, update or unknown.
    pub async fn classify(&self, text: &str) -> Intent {
        match self.classify_with_llm(text).await {
            LlmStage::Classified(intent) if intent != Intent::Unknown => intent,
            _ => classify_with_patterns(text),
        }
    }

    async fn classify_with_llm(&self, text: &str) -> LlmStage {
        let prompt = prompts::intent_classification(text);
        match self.chat.complete(&prompt).await {
            Ok(reply) => LlmStage::Classified(parse_intent_reply(&reply)),
            Err(err) => {
                debug!(%err, "intent classification call failed, falling back to patterns");
                LlmStage::Unavailable
            }
        }
    }
}

/// Read an intent out of the model's reply by substring containment,
/// create before update before query.
pub fn parse_intent_reply(reply: &str) -> Intent {
    let lower = reply.to_lowercase();
    if lower.contains("create") {
        Intent::Create
    } else if lower.contains("update") {
        Intent::Update
    } else if lower.contains("query") {
        Intent::Query
    } else {
        Intent::Unknown
    }
}

// A ticket noun may sit a few words after its verb ("create a bug ticket"),
// hence the bounded word gap instead of strict adjacency.
static CREATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:create|new|add|make)\s+(?:\w+\s+){0,3}(?:ticket|issue|bug|task|story|epic)\b")
        .expect("create pattern is valid")
});

static UPDATE_VERB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:update|edit|modify|change|assign|move|transition)\s+").expect("update pattern is valid")
});

static UPDATE_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:set|assign)\s+\w+-\d+").expect("set/assign pattern is valid"));

static KEY_CONTEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+-\d+\s+(?:to|status|assignee)\b").expect("key context pattern is valid"));

static QUERY_VERB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:show|list|find|search|get|display)\s+(?:\w+\s+){0,3}(?:tickets?|issues?|bugs?|tasks?)\b")
        .expect("query verb pattern is valid")
});

static QUERY_QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:what|which|how many)\s+(?:tickets?|issues?)\b").expect("question pattern is valid")
});

static QUERY_NOUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\btickets?\s+(?:assigned|for|in|with)\b").expect("noun pattern is valid")
});

/// Deterministic fallback classification. Families are checked in order:
/// create, then update, then query; first match wins.
pub fn classify_with_patterns(text: &str) -> Intent {
    let input = text.to_lowercase();

    if CREATE_PATTERN.is_match(&input) {
        Intent::Create
    } else if UPDATE_VERB_PATTERN.is_match(&input)
        || UPDATE_KEY_PATTERN.is_match(&input)
        || KEY_CONTEXT_PATTERN.is_match(&input)
    {
        Intent::Update
    } else if QUERY_VERB_PATTERN.is_match(&input)
        || QUERY_QUESTION_PATTERN.is_match(&input)
        || QUERY_NOUN_PATTERN.is_match(&input)
    {
        Intent::Query
    } else {
        Intent::Unknown
    }
}
