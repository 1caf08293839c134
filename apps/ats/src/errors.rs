use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::ExtractError;
use crate::models::evaluation::ParseFailure;

pub const MISSING_INPUT_MESSAGE: &str = "Please upload a resume and enter a job description.";
pub const UNEXPECTED_FORMAT_MESSAGE: &str =
    "AI response was not in the expected format. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    #[error("PDF error: {0}")]
    Pdf(#[from] ExtractError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] ParseFailure),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, raw_response) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "The uploaded resume is too large".to_string(),
                None,
            ),
            AppError::Pdf(e) => {
                tracing::warn!("PDF error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PDF_ERROR",
                    format!("Could not read the uploaded resume. {e}"),
                    None,
                )
            }
            // Shape failures deliberately hide the raw reply.
            AppError::Evaluation(ParseFailure::Shape { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNEXPECTED_FORMAT",
                UNEXPECTED_FORMAT_MESSAGE.to_string(),
                None,
            ),
            AppError::Evaluation(failure @ ParseFailure::Decoding { raw, .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "JSON_DECODE_ERROR",
                failure.to_string(),
                Some(raw.clone()),
            ),
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(raw) = raw_response {
            error["raw_response"] = json!(raw);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
