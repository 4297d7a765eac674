//! Cleanup of raw model text before it is stored or parsed.

use serde::de::DeserializeOwned;

use super::LlmError;

/// Strips a ```` ``` ```` code fence (with or without a language tag such as
/// `json`, `JSON` or `markdown`) from LLM output and trims.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let body = match text.strip_prefix("```") {
        Some(rest) => strip_fence_tag(rest),
        None => text,
    };
    let body = body.trim();
    body.strip_suffix("```").map(str::trim).unwrap_or(body)
}

/// Drops the info string on the opening fence line when it is a single tag word.
fn strip_fence_tag(rest: &str) -> &str {
    let (first_line, remainder) = rest.split_once('\n').unwrap_or((rest, ""));
    let tag = first_line.trim();
    let is_tag = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.'));
    if is_tag {
        remainder
    } else {
        rest
    }
}

/// Strips fences and parses the remainder as JSON.
/// No attempt is made to repair malformed output.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    serde_json::from_str(text).map_err(LlmError::Parse)
}
