use serde::{Deserialize, Deserializer, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub technical_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub soft_skills: Vec<String>,
    #[serde(
        default = "default_experience_summary",
        deserialize_with = "experience_summary_or_default"
    )]
    pub experience_summary: String,
    /// 0.0 - 10.0
    #[serde(default, deserialize_with = "lenient::score")]
    pub resume_strength: f32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub years_of_experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_experience_summary() -> String {
    "Not specified".to_string()
}

fn experience_summary_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::optional_text(deserializer)?.unwrap_or_else(default_experience_summary))
}

impl ResumeAnalysis {
    pub fn failed(experience_summary: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            technical_skills: Vec::new(),
            soft_skills: Vec::new(),
            experience_summary: experience_summary.into(),
            resume_strength: 0.0,
            years_of_experience: 0,
            error: Some(error.into()),
        }
    }
}
