use serde::{Deserialize, Serialize};

/// A single question submitted to the answering service.
///
/// Built fresh from the display surface's question field for each cycle and
/// discarded once the answer is rendered. The wire body (`{"query": ...}`)
/// is produced by the HTTP layer, not by serialising this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    pub text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One supporting evidence fragment attached to an answer.
///
/// The service sends additional per-citation scoring fields
/// (`retrieval_score`, `sentence_similarity`, ...); those are ignored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub topic: String,
    pub chunk: String,
}

/// Deserialised `/ask` response.
///
/// Notes:
/// - `answer` is `null` when the service could not ground an answer; the
///   accompanying `status` string then explains why.
/// - `citations` distinguishes absent/`null` (`None`) from present-but-empty
///   (`Some(vec![])`). Order is display order and is preserved as received.
/// - `confidence` is always present in service responses and is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    #[serde(default)]
    pub answer: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
}
