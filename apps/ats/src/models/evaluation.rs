use thiserror::Error;
use uuid::Uuid;

/// One user submission. Immutable; dropped when the pipeline run ends.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    /// Log correlation only.
    pub id: Uuid,
    pub resume_text: String,
    pub job_description: String,
}

impl EvaluationRequest {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            resume_text: resume_text.into(),
            job_description: job_description.into(),
        }
    }
}

/// Untrusted model output. May be fenced, may not be JSON at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawModelReply {
    pub text: String,
}

impl RawModelReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A validated evaluation. Only built once all three fields were present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Verbatim as the model supplied it, e.g. "87%".
    pub match_percentage: String,
    pub missing_keywords: Vec<String>,
    pub profile_summary: String,
}

impl EvaluationResult {
    /// Keywords joined for display: `"Kubernetes, gRPC"`.
    pub fn missing_keywords_display(&self) -> String {
        self.missing_keywords.join(", ")
    }
}

/// Why a reply could not be turned into an `EvaluationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The candidate text is not valid JSON.
    #[error("JSON decoding error: {diagnostic}")]
    Decoding { diagnostic: String, raw: String },

    /// Valid JSON, but not an object carrying every required field.
    #[error("response missing required field(s): {}", .missing.join(", "))]
    Shape {
        missing: Vec<&'static str>,
        raw: String,
    },
}

impl ParseFailure {
    /// The reply text that failed, exactly as received.
    pub fn raw(&self) -> &str {
        match self {
            ParseFailure::Decoding { raw, .. } | ParseFailure::Shape { raw, .. } => raw,
        }
    }
}
