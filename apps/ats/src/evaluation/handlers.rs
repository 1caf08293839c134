//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::document::extract_pdf_text;
use crate::errors::{AppError, MISSING_INPUT_MESSAGE};
use crate::evaluation::pipeline::evaluate;
use crate::models::evaluation::{EvaluationRequest, EvaluationResult};
use crate::state::AppState;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The submitted form, before any validation.
#[derive(Debug, Default)]
struct EvaluationForm {
    job_description: String,
    resume: Option<Bytes>,
}

impl EvaluationForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = EvaluationForm::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                JOB_DESCRIPTION_FIELD => {
                    form.job_description = field.text().await.map_err(malformed)?;
                }
                RESUME_FIELD => {
                    form.resume = Some(field.bytes().await.map_err(malformed)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Both inputs are required; a blank description or empty file counts as missing.
    fn into_inputs(self) -> Result<(Bytes, String), AppError> {
        match self.resume {
            Some(resume) if !resume.is_empty() && !self.job_description.trim().is_empty() => {
                Ok((resume, self.job_description))
            }
            _ => Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
        }
    }
}

fn malformed(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge;
    }
    AppError::Validation(format!("Malformed upload: {e}"))
}

/// What the user sees on success.
#[derive(Debug, Serialize)]
pub struct EvaluationView {
    pub jd_match: String,
    pub missing_keywords: String,
    pub profile_summary: String,
}

impl From<&EvaluationResult> for EvaluationView {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            jd_match: result.match_percentage.clone(),
            missing_keywords: result.missing_keywords_display(),
            profile_summary: result.profile_summary.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluate
///
/// Multipart form: `job_description` (text) and `resume` (PDF file).
/// Extracts the resume text, asks the model, and returns the parsed triple.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationView>, AppError> {
    let (resume, job_description) = EvaluationForm::read(&mut multipart).await?.into_inputs()?;

    let extracted = extract_pdf_text(&resume)?;
    info!(
        "Resume upload: {} bytes, {} page(s), {} unreadable",
        resume.len(),
        extracted.page_count,
        extracted.unreadable_pages.len()
    );

    let request = EvaluationRequest::new(extracted.text, job_description);
    let result = evaluate(&request, state.llm.as_ref()).await?;

    Ok(Json(EvaluationView::from(&result)))
}
