use serde::{Deserialize, Deserializer, Serialize};

use super::lenient;

/// A skill the target role needs. `priority` is the model's own label
/// (normally High, Medium or Low) and is not validated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    #[serde(default, deserialize_with = "lenient::text")]
    pub skill: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reason: String,
}

impl MissingSkill {
    pub fn new(skill: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            priority: priority.into(),
            reason: String::new(),
        }
    }

    pub fn describe(&self) -> String {
        if self.priority.trim().is_empty() {
            self.skill.clone()
        } else {
            format!("{} ({})", self.skill, self.priority)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    #[serde(default, deserialize_with = "lenient::records")]
    pub missing_skills: Vec<MissingSkill>,
    #[serde(default = "default_gap_analysis", deserialize_with = "gap_analysis_or_default")]
    pub gap_analysis: String,
    /// 0.0 - 10.0
    #[serde(default, deserialize_with = "lenient::score")]
    pub readiness_score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_gap_analysis() -> String {
    "No gaps identified".to_string()
}

fn gap_analysis_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::optional_text(deserializer)?.unwrap_or_else(default_gap_analysis))
}

impl SkillGapAnalysis {
    pub fn failed(gap_analysis: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            missing_skills: Vec::new(),
            gap_analysis: gap_analysis.into(),
            readiness_score: 0.0,
            error: Some(error.into()),
        }
    }
}

/// Skills a roadmap should cover, either as bare names or as prioritized
/// records straight out of a gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissingSkills {
    Names(Vec<String>),
    Prioritized(Vec<MissingSkill>),
}

impl MissingSkills {
    pub fn is_empty(&self) -> bool {
        match self {
            MissingSkills::Names(names) => names.is_empty(),
            MissingSkills::Prioritized(skills) => skills.is_empty(),
        }
    }

    /// Flattens the list into one line: `SQL (High), Docker (Low)` for
    /// prioritized records, `SQL, Docker` for bare names.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "No specific skills provided".to_string();
        }

        match self {
            MissingSkills::Names(names) => names.join(", "),
            MissingSkills::Prioritized(skills) => skills
                .iter()
                .map(MissingSkill::describe)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl Default for MissingSkills {
    fn default() -> Self {
        MissingSkills::Names(Vec::new())
    }
}

impl From<Vec<String>> for MissingSkills {
    fn from(names: Vec<String>) -> Self {
        MissingSkills::Names(names)
    }
}

impl From<Vec<&str>> for MissingSkills {
    fn from(names: Vec<&str>) -> Self {
        MissingSkills::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<Vec<MissingSkill>> for MissingSkills {
    fn from(skills: Vec<MissingSkill>) -> Self {
        MissingSkills::Prioritized(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_prioritized() {
        let skills = MissingSkills::from(vec![
            MissingSkill::new("SQL", "High"),
            MissingSkill::new("Docker", "Low"),
        ]);
        let text = skills.describe();
        assert!(text.contains("SQL (High)"));
        assert!(text.contains("Docker (Low)"));
        assert_eq!(text, "SQL (High), Docker (Low)");
    }

    #[test]
    fn test_describe_bare_names() {
        let skills = MissingSkills::from(vec!["SQL", "Docker"]);
        assert_eq!(skills.describe(), "SQL, Docker");
    }

    #[test]
    fn test_describe_record_without_priority() {
        let skills = MissingSkills::from(vec![
            MissingSkill::new("Kubernetes", ""),
            MissingSkill::new("Go", "Medium"),
        ]);
        assert_eq!(skills.describe(), "Kubernetes, Go (Medium)");
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(MissingSkills::default().describe(), "No specific skills provided");
        assert_eq!(
            MissingSkills::Prioritized(Vec::new()).describe(),
            "No specific skills provided"
        );
    }

    #[test]
    fn test_gap_reply_tolerates_partial_records() {
        let analysis: SkillGapAnalysis = serde_json::from_str(
            r#"{
                "missing_skills": [
                    {"priority": "High", "reason": "No name given"},
                    {"skill": "Docker", "priority": null}
                ],
                "gap_analysis": null,
                "readiness_score": "6"
            }"#,
        )
        .unwrap();
        assert_eq!(analysis.missing_skills.len(), 2);
        assert_eq!(analysis.missing_skills[0].skill, "");
        assert_eq!(analysis.missing_skills[0].priority, "High");
        assert_eq!(analysis.missing_skills[1].describe(), "Docker");
        assert_eq!(analysis.gap_analysis, "No gaps identified");
        assert_eq!(analysis.readiness_score, 6.0);
    }

    #[test]
    fn test_untagged_accepts_both_shapes() {
        let names: MissingSkills = serde_json::from_str(r#"["SQL", "Docker"]"#).unwrap();
        assert_eq!(names, MissingSkills::from(vec!["SQL", "Docker"]));

        let records: MissingSkills =
            serde_json::from_str(r#"[{"skill": "SQL", "priority": "High"}]"#).unwrap();
        assert_eq!(records.describe(), "SQL (High)");
    }
}
