use serde::{Deserialize, Serialize};

use super::lenient;

pub const FALLBACK_PREPARATION_TIPS: [&str; 2] =
    ["Review your technical skills", "Practice the STAR method"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalQuestion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    /// Easy, Medium or Hard as labelled by the model.
    #[serde(default, deserialize_with = "lenient::text")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralQuestion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub focus_area: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPreparation {
    pub target_role: String,
    pub technical_questions: Vec<TechnicalQuestion>,
    pub behavioral_questions: Vec<BehavioralQuestion>,
    pub preparation_tips: Vec<String>,
    pub common_red_flags: Vec<String>,
    pub success_strategies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterviewReply {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub target_role: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub technical_questions: Vec<TechnicalQuestion>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub behavioral_questions: Vec<BehavioralQuestion>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub preparation_tips: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub common_red_flags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub success_strategies: Vec<String>,
}

impl InterviewPreparation {
    pub(crate) fn from_reply(reply: InterviewReply, target_role: &str) -> Self {
        Self {
            target_role: reply.target_role.unwrap_or_else(|| target_role.to_string()),
            technical_questions: reply.technical_questions,
            behavioral_questions: reply.behavioral_questions,
            preparation_tips: reply.preparation_tips,
            common_red_flags: reply.common_red_flags,
            success_strategies: reply.success_strategies,
            error: None,
        }
    }

    /// Unlike every other list, preparation tips are never empty on failure.
    pub fn failed(target_role: &str, error: impl Into<String>) -> Self {
        Self {
            target_role: target_role.to_string(),
            technical_questions: Vec::new(),
            behavioral_questions: Vec::new(),
            preparation_tips: FALLBACK_PREPARATION_TIPS
                .iter()
                .map(|tip| tip.to_string())
                .collect(),
            common_red_flags: Vec::new(),
            success_strategies: Vec::new(),
            error: Some(error.into()),
        }
    }
}
