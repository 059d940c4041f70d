use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{generate_json, CareerRequest, LLMProvider};
use crate::models::CareerRecommendations;

use super::provider_from_config;

/// Recommends a best-fit role and up to two alternatives for a profile.
pub struct CareerAdvisor {
    llm: Arc<dyn LLMProvider>,
}

impl CareerAdvisor {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    pub async fn recommend_careers(
        &self,
        technical_skills: &[String],
        soft_skills: &[String],
        experience_summary: &str,
        years_of_experience: u32,
    ) -> CareerRecommendations {
        let prompt = CareerRequest {
            technical_skills,
            soft_skills,
            experience_summary,
            years_of_experience,
        }
        .to_prompt();

        match generate_json::<CareerRecommendations>(self.llm.as_ref(), &prompt).await {
            Ok(mut recommendations) => {
                recommendations.cap_alternatives();
                recommendations
            }
            Err(e) => {
                tracing::warn!("Career recommendation failed: {}", e);
                let reasoning = if e.is_parse_error() {
                    "Error analyzing career options".to_string()
                } else {
                    format!("Error: {}", e)
                };
                CareerRecommendations::failed(reasoning, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::{Reply, ScriptedProvider};

    fn advisor(provider: ScriptedProvider) -> CareerAdvisor {
        CareerAdvisor::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_alternatives_capped_in_order() {
        let reply = r#"{
            "best_fit_role": {"title": "Backend Engineer", "match_score": 9.0, "reasoning": "Python and AWS"},
            "alternative_roles": [
                {"title": "Alt 1", "match_score": 8.0, "reasoning": "a"},
                {"title": "Alt 2", "match_score": 7.5, "reasoning": "b"},
                {"title": "Alt 3", "match_score": 7.0, "reasoning": "c"},
                {"title": "Alt 4", "match_score": 6.5, "reasoning": "d"},
                {"title": "Alt 5", "match_score": 6.0, "reasoning": "e"}
            ],
            "career_insights": "Move toward platform work."
        }"#;

        let result = advisor(ScriptedProvider::texts([reply]))
            .recommend_careers(&["Python".to_string()], &[], "5 years", 5)
            .await;

        let titles: Vec<_> = result.alternative_roles.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alt 1", "Alt 2"]);
        assert_eq!(result.best_fit_role.title, "Backend Engineer");
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_missing_fields_defaulted() {
        let result = advisor(ScriptedProvider::texts(["{}"]))
            .recommend_careers(&[], &[], "", 0)
            .await;

        assert_eq!(result.best_fit_role.title, "Not specified");
        assert_eq!(result.best_fit_role.match_score, 0.0);
        assert_eq!(result.best_fit_role.reasoning, "Unable to determine");
        assert!(result.alternative_roles.is_empty());
        assert_eq!(result.career_insights, "No additional insights available");
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let result = advisor(ScriptedProvider::texts(["not json"]))
            .recommend_careers(&[], &[], "", 0)
            .await;

        assert_eq!(result.best_fit_role.title, "Error");
        assert_eq!(result.best_fit_role.match_score, 0.0);
        assert_eq!(result.best_fit_role.reasoning, "Error analyzing career options");
        assert!(result.alternative_roles.is_empty());
        assert_eq!(result.career_insights, "Unable to generate recommendations");
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back() {
        let result = advisor(ScriptedProvider::new(vec![Reply::Fail("timeout".to_string())]))
            .recommend_careers(&[], &[], "", 0)
            .await;

        assert_eq!(result.best_fit_role.title, "Error");
        assert!(result.best_fit_role.reasoning.starts_with("Error: "));
        assert!(result.error.unwrap().contains("timeout"));
    }
}
