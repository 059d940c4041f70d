pub mod resume_analyzer;
pub mod career_advisor;
pub mod skill_gap_analyzer;
pub mod roadmap_builder;
pub mod interview_prep;
pub mod orchestrator;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{GeminiProvider, LLMProvider};

pub use resume_analyzer::ResumeAnalyzer;
pub use career_advisor::CareerAdvisor;
pub use skill_gap_analyzer::SkillGapAnalyzer;
pub use roadmap_builder::RoadmapBuilder;
pub use interview_prep::InterviewPrepGenerator;
pub use orchestrator::{resolve_target_role, Orchestrator, DEFAULT_TARGET_ROLE};

fn provider_from_config(config: &Config) -> Result<Arc<dyn LLMProvider>> {
    Ok(Arc::new(GeminiProvider::new(config)?))
}
