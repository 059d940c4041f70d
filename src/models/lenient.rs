//! Tolerant field readers for model replies. An off-schema value (a null, a
//! float where a count belongs, a number where text belongs) falls back to the
//! field default instead of failing the whole reply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field; numbers and booleans are rendered, anything else is empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| value_text(&v)))
}

/// List of strings; null entries and nested objects are dropped.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values,
        Some(single) => vec![single],
        None => Vec::new(),
    };
    Ok(values.iter().filter_map(value_text).collect())
}

/// List of records; entries that are not readable as `T` are skipped.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values,
        _ => Vec::new(),
    };
    Ok(values
        .into_iter()
        .filter_map(|value| T::deserialize(value).ok())
        .collect())
}

/// Whole count such as years or months. Fractions are truncated, negatives
/// and non-numeric values read as 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_count(deserializer)?.unwrap_or(0))
}

pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_number)
        .map(|n| n.trunc().clamp(0.0, u32::MAX as f64) as u32))
}

/// 0-10 style score; non-numeric values read as 0.0.
pub fn score<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_number)
        .map(|n| n as f32)
        .unwrap_or(0.0))
}

fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "count")]
        years: u32,
        #[serde(default, deserialize_with = "score")]
        strength: f32,
        #[serde(default, deserialize_with = "text")]
        title: String,
        #[serde(default, deserialize_with = "text_list")]
        skills: Vec<String>,
        #[serde(default, deserialize_with = "optional_count")]
        months: Option<u32>,
        #[serde(default, deserialize_with = "records")]
        entries: Vec<Entry>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        name: String,
    }

    fn read(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_counts_accept_floats_and_strings() {
        assert_eq!(read(r#"{"years": 2.5}"#).years, 2);
        assert_eq!(read(r#"{"years": "4"}"#).years, 4);
        assert_eq!(read(r#"{"years": -3}"#).years, 0);
        assert_eq!(read(r#"{"years": "several"}"#).years, 0);
        assert_eq!(read(r#"{"months": 6.0}"#).months, Some(6));
        assert_eq!(read(r#"{"months": null}"#).months, None);
    }

    #[test]
    fn test_nulls_read_as_defaults() {
        let fields = read(r#"{"years": null, "strength": null, "title": null, "skills": null}"#);
        assert_eq!(fields.years, 0);
        assert_eq!(fields.strength, 0.0);
        assert_eq!(fields.title, "");
        assert!(fields.skills.is_empty());
    }

    #[test]
    fn test_scores_and_text_coerced() {
        let fields = read(r#"{"strength": "7.5", "title": 42, "skills": ["Rust", null, 3, {"x": 1}]}"#);
        assert_eq!(fields.strength, 7.5);
        assert_eq!(fields.title, "42");
        assert_eq!(fields.skills, vec!["Rust", "3"]);
    }

    #[test]
    fn test_unreadable_records_skipped() {
        let fields = read(r#"{"entries": [{"name": "a"}, null, {"other": 1}, {"name": "b"}]}"#);
        assert_eq!(
            fields.entries,
            vec![Entry { name: "a".into() }, Entry { name: "b".into() }]
        );
        assert!(read(r#"{"entries": null}"#).entries.is_empty());
    }
}
