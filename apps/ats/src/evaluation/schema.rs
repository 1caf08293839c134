//! Wire contract shared by the prompt composer and the reply parser.
//!
//! The prompt advertises these exact markers and field names to the model and
//! the parser looks for them in the reply. Change both sides together.

/// Opening marker of a JSON-fenced block.
pub const JSON_FENCE_OPEN: &str = "```json";

/// Closing marker of any fenced block.
pub const FENCE: &str = "```";

pub const FIELD_JD_MATCH: &str = "JD Match";
pub const FIELD_MISSING_KEYWORDS: &str = "MissingKeywords";
pub const FIELD_PROFILE_SUMMARY: &str = "Profile Summary";

/// Keys a decoded reply must carry, in display order.
pub const REQUIRED_FIELDS: [&str; 3] = [FIELD_JD_MATCH, FIELD_MISSING_KEYWORDS, FIELD_PROFILE_SUMMARY];
