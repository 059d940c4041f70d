use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGoal {
    /// 0 when the reply left it out; filled from list position afterwards.
    #[serde(default, deserialize_with = "lenient::count")]
    pub month: u32,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub focus_areas: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub learning_objectives: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub skills_to_acquire: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub practice_projects: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub roadmap_duration: u32,
    pub target_role: String,
    /// Normally one entry per month; the length is not enforced.
    pub monthly_goals: Vec<MonthlyGoal>,
    pub overall_strategy: String,
    pub success_metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reply shape as the model sends it. Duration and role fall back to the
/// request values, so they are optional here.
#[derive(Debug, Deserialize)]
pub(crate) struct RoadmapReply {
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub roadmap_duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub target_role: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub monthly_goals: Vec<MonthlyGoal>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub overall_strategy: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub success_metrics: Vec<String>,
}

impl LearningRoadmap {
    pub(crate) fn from_reply(reply: RoadmapReply, target_role: &str, months: u32) -> Self {
        let mut monthly_goals = reply.monthly_goals;
        for (position, goal) in monthly_goals.iter_mut().enumerate() {
            if goal.month == 0 {
                goal.month = position as u32 + 1;
            }
        }

        Self {
            roadmap_duration: reply.roadmap_duration.unwrap_or(months),
            target_role: reply.target_role.unwrap_or_else(|| target_role.to_string()),
            monthly_goals,
            overall_strategy: reply
                .overall_strategy
                .unwrap_or_else(|| "No strategy provided".to_string()),
            success_metrics: reply.success_metrics,
            error: None,
        }
    }

    pub fn failed(
        target_role: &str,
        months: u32,
        overall_strategy: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            roadmap_duration: months,
            target_role: target_role.to_string(),
            monthly_goals: Vec::new(),
            overall_strategy: overall_strategy.into(),
            success_metrics: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap(json: &str) -> LearningRoadmap {
        LearningRoadmap::from_reply(serde_json::from_str(json).unwrap(), "Data Engineer", 6)
    }

    #[test]
    fn test_missing_month_takes_list_position() {
        let roadmap = roadmap(
            r#"{"monthly_goals": [
                {"month": 1, "focus_areas": ["SQL"]},
                {"focus_areas": ["Docker"]},
                {"month": 3.0, "resources": null}
            ]}"#,
        );
        let months: Vec<_> = roadmap.monthly_goals.iter().map(|g| g.month).collect();
        assert_eq!(months, vec![1, 2, 3]);
        assert_eq!(roadmap.monthly_goals[1].focus_areas, vec!["Docker"]);
        assert!(roadmap.monthly_goals[2].resources.is_empty());
    }

    #[test]
    fn test_null_fields_fall_back_to_request() {
        let roadmap = roadmap(
            r#"{"roadmap_duration": null, "target_role": null, "overall_strategy": null,
                "monthly_goals": null, "success_metrics": null}"#,
        );
        assert_eq!(roadmap.roadmap_duration, 6);
        assert_eq!(roadmap.target_role, "Data Engineer");
        assert_eq!(roadmap.overall_strategy, "No strategy provided");
        assert!(roadmap.monthly_goals.is_empty());
        assert!(roadmap.success_metrics.is_empty());
    }
}
