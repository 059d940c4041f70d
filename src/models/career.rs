use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

pub const MAX_ALTERNATIVE_ROLES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// 0.0 - 10.0
    #[serde(default, deserialize_with = "lenient::score")]
    pub match_score: f32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reasoning: String,
}

impl RoleRecommendation {
    pub fn new(title: impl Into<String>, match_score: f32, reasoning: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            match_score,
            reasoning: reasoning.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendations {
    #[serde(default = "unspecified_role", deserialize_with = "role_or_unspecified")]
    pub best_fit_role: RoleRecommendation,
    #[serde(default, deserialize_with = "lenient::records")]
    pub alternative_roles: Vec<RoleRecommendation>,
    #[serde(default = "default_insights", deserialize_with = "insights_or_default")]
    pub career_insights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn unspecified_role() -> RoleRecommendation {
    RoleRecommendation::new("Not specified", 0.0, "Unable to determine")
}

fn default_insights() -> String {
    "No additional insights available".to_string()
}

fn role_or_unspecified<'de, D>(deserializer: D) -> Result<RoleRecommendation, D::Error>
where
    D: Deserializer<'de>,
{
    let role = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(title)) if !title.trim().is_empty() => {
            Some(RoleRecommendation::new(title, 0.0, ""))
        }
        Some(value) => RoleRecommendation::deserialize(value).ok(),
        None => None,
    };
    Ok(role.unwrap_or_else(unspecified_role))
}

fn insights_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::optional_text(deserializer)?.unwrap_or_else(default_insights))
}

impl CareerRecommendations {
    pub fn failed(reasoning: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            best_fit_role: RoleRecommendation::new("Error", 0.0, reasoning),
            alternative_roles: Vec::new(),
            career_insights: "Unable to generate recommendations".to_string(),
            error: Some(error.into()),
        }
    }

    /// Keeps the first alternatives in reply order. Truncation is silent.
    pub fn cap_alternatives(&mut self) {
        self.alternative_roles.truncate(MAX_ALTERNATIVE_ROLES);
    }
}
