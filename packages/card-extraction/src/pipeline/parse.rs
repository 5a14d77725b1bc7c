//! Response parsing - locate and decode the JSON object in model output.

use serde_json::Value;

use crate::error::{ExtractionError, Result};

const FENCE: &str = "```";

/// Strip the first markdown code fence from a model response.
///
/// Handles labeled (```` ```json ````) and unlabeled fences. Text before the
/// opening fence and after the closing fence is dropped. A response without
/// a fence is returned trimmed.
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(open) = trimmed.find(FENCE) else {
        return trimmed;
    };

    let body = skip_fence_label(&trimmed[open + FENCE.len()..]);
    let body = match body.find(FENCE) {
        Some(close) => &body[..close],
        None => body,
    };

    body.trim()
}

/// Skip a language label such as `json` right after an opening fence.
fn skip_fence_label(after_fence: &str) -> &str {
    let label_end = after_fence
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(after_fence.len());
    let rest = &after_fence[label_end..];

    if rest.starts_with(char::is_whitespace) || rest.starts_with(['{', '[']) {
        rest
    } else {
        after_fence
    }
}

/// Parse raw model text into an untyped JSON value.
///
/// Fails with [`ExtractionError::MalformedResponse`] when the text is not
/// valid JSON after fence stripping. The error keeps the raw text so the
/// caller can log it.
pub fn parse_response(response: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fence(response)).map_err(|source| {
        ExtractionError::MalformedResponse {
            raw: response.to_string(),
            source,
        }
    })
}

/// Truncate a string to at most `max_bytes` bytes at a character boundary.
pub(crate) fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}
