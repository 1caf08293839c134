//! Stage 1 of reply parsing: locate the JSON candidate inside a model reply.
//!
//! Models are not guaranteed to fence their output, so this never fails. It
//! always hands back its best guess and leaves judgement to the decoder.

use crate::evaluation::schema::{FENCE, JSON_FENCE_OPEN};

/// Returns the trimmed text between the last ```` ```json ```` marker and the
/// next closing fence.
///
/// Without an opening marker the candidate starts at the beginning of `raw`.
/// Without a closing fence it runs to the end of `raw`.
pub fn locate_json_candidate(raw: &str) -> &str {
    let start = raw
        .rfind(JSON_FENCE_OPEN)
        .map_or(0, |idx| idx + JSON_FENCE_OPEN.len());
    let rest = &raw[start..];
    let end = rest.find(FENCE).unwrap_or(rest.len());
    rest[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_is_unwrapped() {
        let raw = "```json\n{\"JD Match\": \"82%\"}\n```";
        assert_eq!(locate_json_candidate(raw), "{\"JD Match\": \"82%\"}");
    }

    #[test]
    fn test_prose_around_fence_is_dropped() {
        let raw = "Here is the evaluation:\n```json\n{\"a\": 1}\n```\nLet me know if you need more.";
        assert_eq!(locate_json_candidate(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_unfenced_reply_is_used_whole() {
        let raw = "  {\"a\": 1}\n";
        assert_eq!(locate_json_candidate(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_missing_closing_fence_takes_remainder() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(locate_json_candidate(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_last_json_fence_wins() {
        let raw = "```json\n{\"draft\": true}\n```\nRevised:\n```json\n{\"draft\": false}\n```";
        assert_eq!(locate_json_candidate(raw), "{\"draft\": false}");
    }

    #[test]
    fn test_bare_fence_without_json_tag_yields_empty_candidate() {
        // No ```json marker, so the candidate starts at 0 and stops at the first fence.
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(locate_json_candidate(raw), "");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let raw = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(locate_json_candidate(raw), "");
    }

    #[test]
    fn test_empty_reply_yields_empty_candidate() {
        assert_eq!(locate_json_candidate(""), "");
        assert_eq!(locate_json_candidate("```json"), "");
    }
}
