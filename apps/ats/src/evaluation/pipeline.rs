//! Evaluation pipeline: one linear run per submission.
//!
//! Flow: compose prompt → invoke model → parse reply.
//!
//! Model failures never leave `invoke`. They come back as a sentinel reply
//! that the parser rejects at shape validation, so callers see one failure
//! channel whether the service or the reply was at fault.

use tracing::{debug, info, warn};

use crate::evaluation::parser::parse_reply;
use crate::evaluation::prompts::compose;
use crate::llm_client::{LlmError, ModelClient};
use crate::models::evaluation::{EvaluationRequest, EvaluationResult, ParseFailure, RawModelReply};

/// Reply used when the model call itself failed.
pub const API_CALL_FAILED_REPLY: &str = r#"{"error": "API call failed"}"#;

/// Reply used when the model answered without any text.
pub const INVALID_RESPONSE_REPLY: &str = r#"{"error": "Invalid response format"}"#;

/// Maps the client's result onto a reply the parser can consume.
pub fn reply_from_invocation(result: Result<String, LlmError>) -> RawModelReply {
    match result {
        Ok(text) => RawModelReply::new(text),
        Err(LlmError::EmptyContent) => {
            warn!("Model returned no text; substituting sentinel reply");
            RawModelReply::new(INVALID_RESPONSE_REPLY)
        }
        Err(e) => {
            warn!("Model call failed: {e}; substituting sentinel reply");
            RawModelReply::new(API_CALL_FAILED_REPLY)
        }
    }
}

/// Sends `prompt` to the model. Never fails; see `reply_from_invocation`.
pub async fn invoke(client: &dyn ModelClient, prompt: &str) -> RawModelReply {
    let reply = reply_from_invocation(client.generate(prompt).await);
    debug!("Raw model reply: {}", reply.text);
    reply
}

/// Runs the full pipeline for one request.
pub async fn evaluate(
    request: &EvaluationRequest,
    client: &dyn ModelClient,
) -> Result<EvaluationResult, ParseFailure> {
    info!(
        "Evaluating request {}: resume_chars={}, jd_chars={}",
        request.id,
        request.resume_text.len(),
        request.job_description.len()
    );

    let prompt = compose(&request.resume_text, &request.job_description);
    let reply = invoke(client, &prompt).await;

    match parse_reply(&reply.text) {
        Ok(result) => {
            info!(
                "Request {} evaluated: match={}, missing_keywords={}",
                request.id,
                result.match_percentage,
                result.missing_keywords.len()
            );
            Ok(result)
        }
        Err(failure) => {
            warn!("Request {} reply rejected: {failure}", request.id);
            debug!("Rejected reply ({} chars): {}", failure.raw().len(), failure.raw());
            Err(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::evaluation::schema::REQUIRED_FIELDS;

    /// Returns a canned outcome and remembers the last prompt it saw.
    struct ScriptedModel {
        outcome: fn() -> Result<String, LlmError>,
        last_prompt: Mutex<Option<String>>,
    }

    impl ScriptedModel {
        fn new(outcome: fn() -> Result<String, LlmError>) -> Self {
            Self {
                outcome,
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            (self.outcome)()
        }
    }

    #[test]
    fn test_success_passes_text_through() {
        let reply = reply_from_invocation(Ok("```json\n{}\n```".to_string()));
        assert_eq!(reply.text, "```json\n{}\n```");
    }

    #[test]
    fn test_api_failure_becomes_api_sentinel() {
        let reply = reply_from_invocation(Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }));
        assert_eq!(reply.text, API_CALL_FAILED_REPLY);
    }

    #[test]
    fn test_empty_content_becomes_invalid_format_sentinel() {
        let reply = reply_from_invocation(Err(LlmError::EmptyContent));
        assert_eq!(reply.text, INVALID_RESPONSE_REPLY);
    }

    #[test]
    fn test_sentinels_fail_shape_validation() {
        for sentinel in [API_CALL_FAILED_REPLY, INVALID_RESPONSE_REPLY] {
            let failure = parse_reply(sentinel).unwrap_err();
            assert_eq!(
                failure,
                ParseFailure::Shape {
                    missing: REQUIRED_FIELDS.to_vec(),
                    raw: sentinel.to_string(),
                }
            );
        }
    }

    #[tokio::test]
    async fn test_evaluate_success_and_prompt_carries_inputs() {
        let model = ScriptedModel::new(|| {
            Ok("```json\n{\"JD Match\": \"82%\", \"MissingKeywords\": [\"Kubernetes\",\"gRPC\"], \"Profile Summary\": \"Strong backend skills.\"}\n```".to_string())
        });
        let request = EvaluationRequest::new("Rust services at scale", "Backend engineer with gRPC");

        let result = evaluate(&request, &model).await.unwrap();
        assert_eq!(result.match_percentage, "82%");
        assert_eq!(result.missing_keywords_display(), "Kubernetes, gRPC");
        assert_eq!(result.profile_summary, "Strong backend skills.");

        let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Resume: Rust services at scale"));
        assert!(prompt.contains("Job Description: Backend engineer with gRPC"));
    }

    #[tokio::test]
    async fn test_evaluate_model_failure_is_shape_failure() {
        let model = ScriptedModel::new(|| {
            Err(LlmError::Api {
                status: 401,
                message: "API key not valid".to_string(),
            })
        });
        let request = EvaluationRequest::new("resume", "jd");

        let failure = evaluate(&request, &model).await.unwrap_err();
        assert!(matches!(failure, ParseFailure::Shape { .. }));
        assert_eq!(failure.raw(), API_CALL_FAILED_REPLY);
    }

    #[tokio::test]
    async fn test_evaluate_prose_reply_is_decoding_failure() {
        let model = ScriptedModel::new(|| Ok("I cannot evaluate this resume.".to_string()));
        let request = EvaluationRequest::new("resume", "jd");

        let failure = evaluate(&request, &model).await.unwrap_err();
        assert!(matches!(failure, ParseFailure::Decoding { .. }));
        assert_eq!(failure.raw(), "I cannot evaluate this resume.");
    }
}
