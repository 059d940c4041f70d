use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Removes a surrounding markdown fence (```json or ```) from a model reply.
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

pub fn parse_json<T: DeserializeOwned>(response: &str) -> Result<T> {
    let json_str = strip_code_fences(response);

    serde_json::from_str(json_str)
        .map_err(|e| Error::ParseError(format!("Failed to parse LLM response: {}", e)))
}
