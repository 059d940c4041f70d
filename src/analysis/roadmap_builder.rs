use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{generate_json, LLMProvider, RoadmapRequest};
use crate::models::roadmap::RoadmapReply;
use crate::models::{LearningRoadmap, MissingSkills};

use super::provider_from_config;

/// Builds a month-by-month learning plan toward a target role.
pub struct RoadmapBuilder {
    llm: Arc<dyn LLMProvider>,
}

impl RoadmapBuilder {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// `missing_skills` may be bare names or prioritized gap records.
    /// Duration and role are echoed from the request even on failure.
    pub async fn create_roadmap(
        &self,
        target_role: &str,
        missing_skills: impl Into<MissingSkills>,
        current_skills: &[String],
        months: u32,
    ) -> LearningRoadmap {
        let missing_skills = missing_skills.into();
        let prompt = RoadmapRequest {
            target_role,
            missing_skills: &missing_skills,
            current_skills,
            months,
        }
        .to_prompt();

        match generate_json::<RoadmapReply>(self.llm.as_ref(), &prompt).await {
            Ok(reply) => LearningRoadmap::from_reply(reply, target_role, months),
            Err(e) => {
                tracing::warn!("Roadmap generation for '{}' failed: {}", target_role, e);
                let strategy = if e.is_parse_error() {
                    "Error creating roadmap".to_string()
                } else {
                    format!("Error: {}", e)
                };
                LearningRoadmap::failed(target_role, months, strategy, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::{Reply, ScriptedProvider};
    use crate::models::MissingSkill;

    #[tokio::test]
    async fn test_prioritized_skills_in_prompt() {
        let provider = Arc::new(ScriptedProvider::texts(["{}"]));
        let builder = RoadmapBuilder::new(provider.clone());

        let missing = vec![MissingSkill::new("SQL", "High"), MissingSkill::new("Docker", "Low")];
        builder.create_roadmap("Data Engineer", missing, &[], 6).await;

        let prompt = &provider.prompts()[0];
        assert!(prompt.contains("SQL (High)"));
        assert!(prompt.contains("Docker (Low)"));
    }

    #[tokio::test]
    async fn test_bare_skills_in_prompt() {
        let provider = Arc::new(ScriptedProvider::texts(["{}"]));
        let builder = RoadmapBuilder::new(provider.clone());

        builder
            .create_roadmap("Data Engineer", vec!["SQL", "Docker"], &[], 6)
            .await;

        assert!(provider.prompts()[0].contains("Skills to Learn: SQL, Docker\n"));
    }

    #[tokio::test]
    async fn test_goals_parsed_and_defaults_echo_request() {
        let provider = Arc::new(ScriptedProvider::texts([r#"{
            "monthly_goals": [
                {"month": 1, "focus_areas": ["SQL"], "learning_objectives": ["Joins"],
                 "skills_to_acquire": ["SQL"], "practice_projects": ["Reporting DB"],
                 "resources": ["SQLBolt"]},
                {"month": 2, "focus_areas": ["Docker"]}
            ],
            "success_metrics": ["Ship a pipeline"]
        }"#]));
        let builder = RoadmapBuilder::new(provider);

        let roadmap = builder
            .create_roadmap("Data Engineer", MissingSkills::default(), &[], 3)
            .await;

        assert_eq!(roadmap.roadmap_duration, 3);
        assert_eq!(roadmap.target_role, "Data Engineer");
        assert_eq!(roadmap.monthly_goals.len(), 2);
        assert!(roadmap.monthly_goals[1].resources.is_empty());
        assert_eq!(roadmap.overall_strategy, "No strategy provided");
        assert_eq!(roadmap.success_metrics, vec!["Ship a pipeline"]);
        assert!(roadmap.error.is_none());
    }

    #[tokio::test]
    async fn test_goal_without_month_is_kept() {
        let builder = RoadmapBuilder::new(Arc::new(ScriptedProvider::texts([r#"{
            "monthly_goals": [
                {"month": 1, "focus_areas": ["SQL"]},
                {"focus_areas": ["Docker"], "resources": null}
            ],
            "overall_strategy": "Data first."
        }"#])));

        let roadmap = builder.create_roadmap("Data Engineer", vec!["SQL"], &[], 2).await;

        assert!(roadmap.error.is_none());
        assert_eq!(roadmap.monthly_goals.len(), 2);
        assert_eq!(roadmap.monthly_goals[1].month, 2);
        assert_eq!(roadmap.overall_strategy, "Data first.");
    }

    #[tokio::test]
    async fn test_failure_keeps_duration_and_role() {
        let builder = RoadmapBuilder::new(Arc::new(ScriptedProvider::new(vec![
            Reply::Text("garbage".to_string()),
            Reply::Fail("connection reset".to_string()),
        ])));

        let parsed = builder.create_roadmap("ML Engineer", vec!["PyTorch"], &[], 5).await;
        assert_eq!(parsed.roadmap_duration, 5);
        assert_eq!(parsed.target_role, "ML Engineer");
        assert!(parsed.monthly_goals.is_empty());
        assert!(parsed.success_metrics.is_empty());
        assert_eq!(parsed.overall_strategy, "Error creating roadmap");
        assert!(parsed.error.is_some());

        let failed = builder.create_roadmap("ML Engineer", vec!["PyTorch"], &[], 4).await;
        assert_eq!(failed.roadmap_duration, 4);
        assert!(failed.overall_strategy.contains("connection reset"));
    }
}
