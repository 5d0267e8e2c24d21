use serde::{Deserialize, Serialize};

/// What the user wants to do with the tracker, as decided by the classifier.
///
/// `Unknown` is a first-class outcome: it is what the dispatcher routes to a
/// guidance envelope instead of an action service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Query,
    Create,
    Update,
    Unknown,
}

impl Intent {
    /// Lowercase wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Query => "query",
            Intent::Create => "create",
            Intent::Update => "update",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
