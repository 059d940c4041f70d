use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::career::CareerRecommendations;
use super::interview::InterviewPreparation;
use super::resume::ResumeAnalysis;
use super::roadmap::LearningRoadmap;
use super::skill_gap::{MissingSkill, SkillGapAnalysis};

/// Per-run state handed from one stage to the next. Owned by a single run.
#[derive(Debug, Clone, Default)]
pub struct ProfileContext {
    pub resume_text: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_summary: String,
    pub years_of_experience: u32,
    /// Fixed once resolved; later stages only read it.
    pub target_role: Option<String>,
    pub missing_skills: Vec<MissingSkill>,
    pub roadmap_months: u32,
}

impl ProfileContext {
    pub fn new(resume_text: &str, target_role: Option<&str>, roadmap_months: u32) -> Self {
        Self {
            resume_text: resume_text.to_string(),
            target_role: target_role.map(str::to_string),
            roadmap_months,
            ..Default::default()
        }
    }

    pub fn absorb_resume(&mut self, resume: &ResumeAnalysis) {
        self.technical_skills = resume.technical_skills.clone();
        self.soft_skills = resume.soft_skills.clone();
        self.experience_summary = resume.experience_summary.clone();
        self.years_of_experience = resume.years_of_experience;
    }

    /// Technical skills followed by soft skills.
    pub fn all_skills(&self) -> Vec<String> {
        self.technical_skills
            .iter()
            .chain(self.soft_skills.iter())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub resume_analysis: Option<ResumeAnalysis>,
    pub career_recommendations: Option<CareerRecommendations>,
    pub skill_gap_analysis: Option<SkillGapAnalysis>,
    pub learning_roadmap: Option<LearningRoadmap>,
    pub interview_preparation: Option<InterviewPreparation>,
    /// Role used for the gap, roadmap and interview stages.
    pub target_role: Option<String>,
    pub errors: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            resume_analysis: None,
            career_recommendations: None,
            skill_gap_analysis: None,
            learning_roadmap: None,
            interview_preparation: None,
            target_role: None,
            errors: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.resume_analysis.is_some()
            && self.career_recommendations.is_some()
            && self.skill_gap_analysis.is_some()
            && self.learning_roadmap.is_some()
            && self.interview_preparation.is_some()
    }

    /// Error messages carried by individual stage results, in stage order.
    pub fn stage_errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("resume_analysis", self.resume_analysis.as_ref().and_then(|r| r.error.as_deref())),
            (
                "career_recommendations",
                self.career_recommendations.as_ref().and_then(|r| r.error.as_deref()),
            ),
            (
                "skill_gap_analysis",
                self.skill_gap_analysis.as_ref().and_then(|r| r.error.as_deref()),
            ),
            (
                "learning_roadmap",
                self.learning_roadmap.as_ref().and_then(|r| r.error.as_deref()),
            ),
            (
                "interview_preparation",
                self.interview_preparation.as_ref().and_then(|r| r.error.as_deref()),
            ),
        ]
        .into_iter()
        .filter_map(|(stage, error)| error.map(|e| (stage, e)))
        .collect()
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestionCounts {
    pub technical: usize,
    pub behavioral: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub resume_strength: f32,
    pub recommended_role: String,
    pub readiness_score: f32,
    pub total_skill_gaps: usize,
    pub roadmap_duration: u32,
    pub interview_questions_generated: QuestionCounts,
}

impl From<&Report> for Summary {
    fn from(report: &Report) -> Self {
        Self {
            resume_strength: report
                .resume_analysis
                .as_ref()
                .map(|r| r.resume_strength)
                .unwrap_or(0.0),
            recommended_role: report
                .career_recommendations
                .as_ref()
                .map(|c| c.best_fit_role.title.clone())
                .unwrap_or_else(|| "Not determined".to_string()),
            readiness_score: report
                .skill_gap_analysis
                .as_ref()
                .map(|g| g.readiness_score)
                .unwrap_or(0.0),
            total_skill_gaps: report
                .skill_gap_analysis
                .as_ref()
                .map(|g| g.missing_skills.len())
                .unwrap_or(0),
            roadmap_duration: report
                .learning_roadmap
                .as_ref()
                .map(|r| r.roadmap_duration)
                .unwrap_or(0),
            interview_questions_generated: report
                .interview_preparation
                .as_ref()
                .map(|i| QuestionCounts {
                    technical: i.technical_questions.len(),
                    behavioral: i.behavioral_questions.len(),
                })
                .unwrap_or_default(),
        }
    }
}
