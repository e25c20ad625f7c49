//! Post-processing of raw model replies: fence stripping and metadata parsing.

use serde_json::Value;
use tracing::{debug, warn};

use super::types::{ProblemMetadata, NOT_FOUND, UNKNOWN};

const FENCE: &str = "```";

/// Strip markdown code fences (```lang ... ```) from a reply.
///
/// A single pass: everything through the newline after the first fence is
/// dropped, then everything from the closing fence onward. When more than
/// one fence remains after the opener (a code block followed by another
/// block, such as a shell snippet for running it), the first one closes
/// the code, so only the first block is kept. Text without fence markers
/// comes back unchanged.
///
/// The result never contains a fence, so `clean_code(clean_code(x)) ==
/// clean_code(x)` for every input.
pub fn clean_code(text: &str) -> String {
    let mut code = text;

    if let Some(start) = code.find(FENCE) {
        if let Some(nl) = code[start + FENCE.len()..].find('\n') {
            code = &code[start + FENCE.len() + nl + 1..];
        }
    }

    if let Some(end) = code.find(FENCE) {
        code = &code[..end];
    }

    code.to_string()
}

/// Extract a JSON object from a string that may have markdown fences or preamble text.
fn extract_json_block(text: &str) -> &str {
    let trimmed = text.trim();

    // Try: markdown json fence
    if let Some(start) = trimmed.find("```json") {
        if let Some(end) = trimmed[start + 7..].find(FENCE) {
            return trimmed[start + 7..start + 7 + end].trim();
        }
    }

    // Try: markdown plain fence
    if let Some(start) = trimmed.find(FENCE) {
        if let Some(end) = trimmed[start + 3..].find(FENCE) {
            let inner = trimmed[start + 3..start + 3 + end].trim();
            if inner.starts_with('{') {
                return inner;
            }
        }
    }

    // Try: find first { and last }
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if end > start {
                return &trimmed[start..=end];
            }
        }
    }

    trimmed
}

/// String field as text. Numbers are accepted since models sometimes emit them bare.
fn text_field(obj: &serde_json::Map<String, Value>, key: &str, placeholder: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => placeholder.to_string(),
    }
}

fn tags_field(obj: &serde_json::Map<String, Value>) -> Vec<String> {
    obj.get("tags")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|t| t.as_str())
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Fallback when the reply is not structured. Always yields the placeholders.
pub fn heuristic_info(_text: &str) -> ProblemMetadata {
    ProblemMetadata::default()
}

/// Parse the info-lookup reply into metadata.
///
/// Missing or mistyped fields take their placeholder. A reply that is not a
/// JSON object degrades to [`heuristic_info`]; this never fails.
pub fn parse_info(text: &str) -> ProblemMetadata {
    let json_str = extract_json_block(text);

    let parsed: Value = match serde_json::from_str(json_str) {
        Ok(v) => v,
        Err(e) => {
            warn!("Problem info is not valid JSON ({}), using placeholders", e);
            return heuristic_info(text);
        }
    };

    let Some(obj) = parsed.as_object() else {
        warn!("Problem info JSON is not an object, using placeholders");
        return heuristic_info(text);
    };

    let info = ProblemMetadata {
        title: text_field(obj, "title", UNKNOWN),
        difficulty: text_field(obj, "difficulty", UNKNOWN),
        description: text_field(obj, "description", NOT_FOUND),
        examples: text_field(obj, "examples", NOT_FOUND),
        constraints: text_field(obj, "constraints", NOT_FOUND),
        tags: tags_field(obj),
    };
    debug!("Parsed problem info: {} ({})", info.title, info.difficulty);

    info
}
