use serde::{Deserialize, Serialize};

/// Result of a single outbound dispatch attempt.
///
/// Every failure mode of the notifier (transport error, non-2xx status,
/// missing attachment) is normalized into this shape; nothing escapes the
/// dispatch boundary as an error. The parsed body is present only when the
/// call succeeded and the response body was parseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Whether the dispatch succeeded.
    pub success: bool,
    /// Short human-readable description of what happened.
    pub message: String,
    /// Parsed response body, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl DispatchOutcome {
    /// Create a successful outcome with no response body.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            body: None,
        }
    }

    /// Create a successful outcome carrying a parsed response body.
    #[must_use]
    pub fn success_with_body(message: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a failed outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            body: None,
        }
    }

    /// The endpoint's `answer` field, when the response body carries one.
    ///
    /// Remote workflows commonly reply with `{"answer": "..."}`; callers
    /// prefer it over the generic outcome message when present.
    pub fn answer(&self) -> Option<&str> {
        self.body.as_ref()?.get("answer")?.as_str()
    }
}
