//! Suggestion response parser
//!
//! The generation service is asked for schema-shaped JSON but nothing
//! guarantees it. The text is parsed into an untyped value first and each
//! field is checked before a SuggestionResult is built.

use crate::error::{Error, Result};
use crate::types::SuggestionResult;
use serde_json::{Map, Value};

/// Extract the JSON part of a response
///
/// A ```json ... ``` fence is unwrapped; anything else is returned trimmed
/// and must be valid JSON on its own.
///
/// # Examples
/// ```
/// use portfolio_common::extract_json;
///
/// let response = "```json\n{\"title\": \"X\"}\n```";
/// assert_eq!(extract_json(response), "{\"title\": \"X\"}");
/// ```
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    if let Some(body) = trimmed.strip_prefix("```json") {
        if let Some(inner) = body.strip_suffix("```") {
            return inner.trim();
        }
    }
    trimmed
}

/// Parse and validate one suggestion
///
/// # Returns
/// * `Ok(SuggestionResult)` - all four fields present with the right types
/// * `Err(Error::Parse)` - empty text, invalid JSON, or a missing/ill-typed field
pub fn parse_suggestion_response(response: &str) -> Result<SuggestionResult> {
    if response.trim().is_empty() {
        return Err(Error::Parse("empty response".into()));
    }

    let json_str = extract_json(response);
    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("invalid JSON: {}", e)))?;

    let Some(map) = value.as_object() else {
        return Err(Error::Parse("expected a JSON object".into()));
    };

    Ok(SuggestionResult {
        title: require_string(map, "title")?,
        description: require_string(map, "description")?,
        category: require_string(map, "category")?,
        tags: require_string_array(map, "tags")?,
    })
}

fn require_string(map: &Map<String, Value>, key: &str) -> Result<String> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::Parse(format!(
            "field `{}` must be a string, got {}",
            key,
            type_name(other)
        ))),
        None => Err(Error::Parse(format!("missing field `{}`", key))),
    }
}

fn require_string_array(map: &Map<String, Value>, key: &str) -> Result<Vec<String>> {
    let items = match map.get(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::Parse(format!(
                "field `{}` must be an array, got {}",
                key,
                type_name(other)
            )))
        }
        None => return Err(Error::Parse(format!("missing field `{}`", key))),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::Parse(format!(
                "`{}[{}]` must be a string, got {}",
                key,
                i,
                type_name(other)
            ))),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
