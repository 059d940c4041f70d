use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{generate_json, LLMProvider, SkillGapRequest};
use crate::models::SkillGapAnalysis;

use super::provider_from_config;

pub struct SkillGapAnalyzer {
    llm: Arc<dyn LLMProvider>,
}

impl SkillGapAnalyzer {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// `missing_skills` comes back in the order the model lists them;
    /// priorities are the model's labels.
    pub async fn analyze_gaps(
        &self,
        user_skills: &[String],
        target_role: &str,
        experience_summary: &str,
    ) -> SkillGapAnalysis {
        let prompt = SkillGapRequest {
            user_skills,
            target_role,
            experience_summary,
        }
        .to_prompt();

        match generate_json::<SkillGapAnalysis>(self.llm.as_ref(), &prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Skill gap analysis for '{}' failed: {}", target_role, e);
                let summary = if e.is_parse_error() {
                    "Error analyzing skill gaps".to_string()
                } else {
                    format!("Error: {}", e)
                };
                SkillGapAnalysis::failed(summary, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_gaps_parsed() {
        let provider = Arc::new(ScriptedProvider::texts([r#"{
            "missing_skills": [
                {"skill": "Kubernetes", "priority": "High", "reason": "Deployments"},
                {"skill": "Terraform", "priority": "Low", "reason": "IaC"}
            ],
            "gap_analysis": "Mostly ready.",
            "readiness_score": 7.5
        }"#]));
        let analyzer = SkillGapAnalyzer::new(provider.clone());

        let result = analyzer
            .analyze_gaps(&["Python".to_string()], "DevOps Engineer", "")
            .await;

        assert_eq!(result.missing_skills.len(), 2);
        assert_eq!(result.missing_skills[0].skill, "Kubernetes");
        assert_eq!(result.missing_skills[1].priority, "Low");
        assert_eq!(result.readiness_score, 7.5);
        assert!(provider.prompts()[0].contains("Target Job Role: DevOps Engineer"));
    }

    #[tokio::test]
    async fn test_missing_fields_defaulted() {
        let analyzer = SkillGapAnalyzer::new(Arc::new(ScriptedProvider::texts(["```\n{}\n```"])));
        let result = analyzer.analyze_gaps(&[], "Data Scientist", "").await;

        assert!(result.missing_skills.is_empty());
        assert_eq!(result.gap_analysis, "No gaps identified");
        assert_eq!(result.readiness_score, 0.0);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let analyzer = SkillGapAnalyzer::new(Arc::new(ScriptedProvider::texts(["{\"missing_skills\": ["])));
        let result = analyzer.analyze_gaps(&[], "Data Scientist", "").await;

        assert!(result.missing_skills.is_empty());
        assert_eq!(result.gap_analysis, "Error analyzing skill gaps");
        assert_eq!(result.readiness_score, 0.0);
        assert!(result.error.is_some());
    }
}
