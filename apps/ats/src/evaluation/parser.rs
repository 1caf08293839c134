//! Reply parser: fence location → JSON decoding → shape validation.
//!
//! Each stage is a separate function so it can be tested on its own.
//! `parse_reply` chains them and is pure; the same input always gives the
//! same output.

use serde_json::{Map, Value};

use crate::evaluation::fence::locate_json_candidate;
use crate::evaluation::schema::{
    FIELD_JD_MATCH, FIELD_MISSING_KEYWORDS, FIELD_PROFILE_SUMMARY, REQUIRED_FIELDS,
};
use crate::models::evaluation::{EvaluationResult, ParseFailure};

/// Runs all three stages over a raw model reply.
pub fn parse_reply(raw: &str) -> Result<EvaluationResult, ParseFailure> {
    let candidate = locate_json_candidate(raw);
    let value = decode_candidate(candidate, raw)?;
    validate_shape(&value, raw)
}

/// Stage 2. `raw` is carried into the failure for display, not decoded.
pub fn decode_candidate(candidate: &str, raw: &str) -> Result<Value, ParseFailure> {
    serde_json::from_str(candidate).map_err(|e| ParseFailure::Decoding {
        diagnostic: e.to_string(),
        raw: raw.to_string(),
    })
}

/// Stage 3. Non-object values (arrays included) fail here, not in decoding.
/// Extra keys are ignored; a `null` counts as absent.
pub fn validate_shape(value: &Value, raw: &str) -> Result<EvaluationResult, ParseFailure> {
    let Some(object) = value.as_object() else {
        return Err(ParseFailure::Shape {
            missing: REQUIRED_FIELDS.to_vec(),
            raw: raw.to_string(),
        });
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| present(object, field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ParseFailure::Shape {
            missing,
            raw: raw.to_string(),
        });
    }

    Ok(EvaluationResult {
        match_percentage: present(object, FIELD_JD_MATCH)
            .map(display_text)
            .unwrap_or_default(),
        missing_keywords: keyword_list(present(object, FIELD_MISSING_KEYWORDS)),
        profile_summary: present(object, FIELD_PROFILE_SUMMARY)
            .map(display_text)
            .unwrap_or_default(),
    })
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}

/// Strings pass through untouched; anything else keeps its JSON rendering.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalises the keywords field into a list. A lone string is one keyword.
fn keyword_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(display_text).collect(),
        Some(other) => vec![display_text(other)],
    }
}
