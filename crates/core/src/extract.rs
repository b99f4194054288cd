//! Post-processing of raw model output into a JSON object.
//!
//! Models asked for "JSON only" still routinely wrap their answer in
//! markdown code fences or lead-in prose. Recovery is done in two
//! steps: strip fence markers, then slice from the first `{` to the
//! last `}` and parse. Both steps are idempotent on already-clean
//! input.

use crate::error::CoreError;

/// Opening fence marker for a JSON code block.
const FENCE_JSON: &str = "```json";
/// Bare fence marker (closing, or opening without a language tag).
const FENCE: &str = "```";

/// Remove markdown code-fence markers and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(FENCE_JSON, "").replace(FENCE, "").trim().to_string()
}

/// Locate and parse the JSON object embedded in `text`.
///
/// Slices from the first `{` to the last `}` inclusive. Fails with
/// [`CoreError::Parse`] when no such span exists, when the braces are
/// misordered, or when the slice is not a JSON object.
pub fn extract_json_object(text: &str) -> Result<serde_json::Map<String, serde_json::Value>, CoreError> {
    let start = text.find('{');
    let end = text.rfind('}');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if e > s => (s, e),
        _ => {
            return Err(CoreError::Parse(
                "no valid JSON found in response".to_string(),
            ))
        }
    };

    let slice = &text[start..=end];
    let value: serde_json::Value = serde_json::from_str(slice)
        .map_err(|e| CoreError::Parse(format!("model response is not valid JSON: {e}")))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(CoreError::Parse(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Full post-processing pipeline: strip fences, then extract and parse.
pub fn parse_model_response(
    raw: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, CoreError> {
    let clean = strip_code_fences(raw);
    extract_json_object(&clean)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
