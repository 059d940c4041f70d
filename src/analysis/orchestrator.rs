use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::{
    CareerAdvisor, InterviewPrepGenerator, ResumeAnalyzer, RoadmapBuilder, SkillGapAnalyzer,
};
use crate::config::{Config, PipelineConfig};
use crate::error::Result;
use crate::llm::LLMProvider;
use crate::models::{CareerRecommendations, ProfileContext, Report, Summary};

use super::provider_from_config;

/// Used when neither the caller nor the career stage names a role.
pub const DEFAULT_TARGET_ROLE: &str = "Software Engineer";

const STAGE_COUNT: u64 = 5;

/// Runs the five analysis stages in order and assembles the report.
///
/// Stages are awaited one after another; each reads what the previous ones
/// put into the [`ProfileContext`]. Analyzers absorb their own failures, so
/// every stage runs even when an earlier one only produced defaults.
pub struct Orchestrator {
    resume_analyzer: ResumeAnalyzer,
    career_advisor: CareerAdvisor,
    skill_gap_analyzer: SkillGapAnalyzer,
    roadmap_builder: RoadmapBuilder,
    interview_prep: InterviewPrepGenerator,
    config: PipelineConfig,
    show_progress: bool,
}

impl Orchestrator {
    pub fn new(llm: Arc<dyn LLMProvider>, config: PipelineConfig) -> Self {
        Self {
            resume_analyzer: ResumeAnalyzer::new(llm.clone()),
            career_advisor: CareerAdvisor::new(llm.clone()),
            skill_gap_analyzer: SkillGapAnalyzer::new(llm.clone()),
            roadmap_builder: RoadmapBuilder::new(llm.clone()),
            interview_prep: InterviewPrepGenerator::new(llm),
            config,
            show_progress: false,
        }
    }

    /// Fails before any work starts when the credential is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?, PipelineConfig::from(config)))
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Always returns a report. A panic while sequencing the stages is
    /// recorded in `errors` and the stages completed so far are kept.
    pub async fn run(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
        roadmap_months: u32,
    ) -> Report {
        let mut context = ProfileContext::new(resume_text, target_role, roadmap_months);
        let mut report = Report::new();
        let pb = self.progress_bar();

        let outcome = AssertUnwindSafe(self.run_stages(&mut context, &mut report, &pb))
            .catch_unwind()
            .await;

        match outcome {
            Ok(()) => {
                tracing::info!("Analysis complete!");
                pb.finish_with_message("analysis complete");
            }
            Err(panic) => {
                let error_msg = format!(
                    "Error in workflow execution: {}",
                    panic_message(panic.as_ref())
                );
                tracing::error!("{}", error_msg);
                report.errors.push(error_msg);
                pb.abandon_with_message("analysis aborted");
            }
        }

        report
    }

    pub fn get_summary(report: &Report) -> Summary {
        Summary::from(report)
    }

    async fn run_stages(&self, context: &mut ProfileContext, report: &mut Report, pb: &ProgressBar) {
        tracing::info!("Step 1: Analyzing resume...");
        pb.set_message("resume");
        let resume = self.resume_analyzer.analyze(&context.resume_text).await;
        context.absorb_resume(&resume);
        report.resume_analysis = Some(resume);
        pb.inc(1);

        tracing::info!("Step 2: Generating career recommendations...");
        pb.set_message("career");
        let career = self
            .career_advisor
            .recommend_careers(
                &context.technical_skills,
                &context.soft_skills,
                &context.experience_summary,
                context.years_of_experience,
            )
            .await;

        let target_role = resolve_target_role(context.target_role.as_deref(), &career);
        tracing::info!("Target role: {}", target_role);
        context.target_role = Some(target_role.clone());
        report.target_role = Some(target_role.clone());
        report.career_recommendations = Some(career);
        pb.inc(1);

        tracing::info!("Step 3: Analyzing skill gaps...");
        pb.set_message("skill gaps");
        let all_skills = context.all_skills();
        let gaps = self
            .skill_gap_analyzer
            .analyze_gaps(&all_skills, &target_role, &context.experience_summary)
            .await;
        context.missing_skills = gaps.missing_skills.clone();
        report.skill_gap_analysis = Some(gaps);
        pb.inc(1);

        tracing::info!("Step 4: Creating learning roadmap...");
        pb.set_message("roadmap");
        let roadmap = self
            .roadmap_builder
            .create_roadmap(
                &target_role,
                context.missing_skills.clone(),
                &all_skills,
                context.roadmap_months,
            )
            .await;
        report.learning_roadmap = Some(roadmap);
        pb.inc(1);

        tracing::info!("Step 5: Generating interview questions...");
        pb.set_message("interview");
        let interview = self
            .interview_prep
            .generate_questions(
                &target_role,
                &context.technical_skills,
                &context.experience_summary,
                self.config.num_technical_questions,
                self.config.num_behavioral_questions,
            )
            .await;
        report.interview_preparation = Some(interview);
        pb.inc(1);
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(STAGE_COUNT);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} stages ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

/// Caller override if non-blank, else the career stage's best fit, else
/// [`DEFAULT_TARGET_ROLE`]. The chosen value is passed through as given.
pub fn resolve_target_role(requested: Option<&str>, career: &CareerRecommendations) -> String {
    requested
        .filter(|role| !role.trim().is_empty())
        .or_else(|| {
            let title = career.best_fit_role.title.as_str();
            (!title.trim().is_empty()).then_some(title)
        })
        .unwrap_or(DEFAULT_TARGET_ROLE)
        .to_string()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
