use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use career_mentor::{Config, Orchestrator, Report, Summary};

#[derive(Parser, Debug)]
#[command(name = "career-mentor")]
#[command(version = "0.1.0")]
#[command(about = "Turn a resume into a career mentoring report")]
struct Args {
    /// Resume text file ("-" or omitted reads stdin)
    #[arg(short, long)]
    resume: Option<String>,

    /// Target role; recommended from the resume when omitted
    #[arg(short, long)]
    target_role: Option<String>,

    /// Learning roadmap length in months (3-6)
    #[arg(short, long)]
    months: Option<u32>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Print only the summary
    #[arg(long)]
    summary: bool,

    /// Gemini model override
    #[arg(long)]
    model: Option<String>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("career_mentor=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    let months = args.months.unwrap_or(config.roadmap_months);
    if !(3..=6).contains(&months) {
        tracing::warn!("Roadmap length of {} months is outside the usual 3-6 range", months);
    }

    let resume_text = read_resume(args.resume.as_deref())?;
    if resume_text.trim().is_empty() {
        tracing::warn!("Resume text is empty; results will be mostly defaults");
    }

    let orchestrator = Orchestrator::from_config(&config)?.with_progress(!args.no_progress);

    tracing::info!("Starting career analysis with {}", config.model);
    let report = orchestrator
        .run(&resume_text, args.target_role.as_deref(), months)
        .await;

    output_report(&report, &args)?;

    Ok(())
}

fn read_resume(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume from {}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read resume from stdin")?;
            Ok(text)
        }
    }
}

fn output_report(report: &Report, args: &Args) -> anyhow::Result<()> {
    let summary = Orchestrator::get_summary(report);
    let output = match (args.format.as_str(), args.summary) {
        ("json", true) => serde_json::to_string_pretty(&summary)?,
        ("json", false) => serde_json::to_string_pretty(report)?,
        ("markdown", summary_only) => format_markdown(report, &summary, summary_only),
        (_, summary_only) => format_text(report, &summary, summary_only),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &Report, summary: &Summary, summary_only: bool) -> String {
    let mut output = String::new();

    output.push_str("\n=== Career Mentoring Report ===\n\n");
    output.push_str(&format!("Resume Strength: {:.1}/10\n", summary.resume_strength));
    output.push_str(&format!("Recommended Role: {}\n", summary.recommended_role));
    if let Some(ref role) = report.target_role {
        output.push_str(&format!("Target Role: {}\n", role));
    }
    output.push_str(&format!("Readiness Score: {:.1}/10\n", summary.readiness_score));
    output.push_str(&format!("Skill Gaps: {}\n", summary.total_skill_gaps));
    output.push_str(&format!("Roadmap: {} months\n", summary.roadmap_duration));
    output.push_str(&format!(
        "Interview Questions: {} technical, {} behavioral\n",
        summary.interview_questions_generated.technical,
        summary.interview_questions_generated.behavioral
    ));

    if !summary_only {
        if let Some(ref resume) = report.resume_analysis {
            output.push_str(&format!("\nExperience: {}\n", resume.experience_summary));
            if !resume.technical_skills.is_empty() {
                output.push_str(&format!(
                    "Technical Skills: {}\n",
                    resume.technical_skills.join(", ")
                ));
            }
            if !resume.soft_skills.is_empty() {
                output.push_str(&format!("Soft Skills: {}\n", resume.soft_skills.join(", ")));
            }
        }

        if let Some(ref career) = report.career_recommendations {
            output.push_str("\nCareer Recommendations:\n");
            output.push_str(&format!(
                "  * {} ({:.1}/10): {}\n",
                career.best_fit_role.title,
                career.best_fit_role.match_score,
                career.best_fit_role.reasoning
            ));
            for role in &career.alternative_roles {
                output.push_str(&format!(
                    "  - {} ({:.1}/10): {}\n",
                    role.title, role.match_score, role.reasoning
                ));
            }
            output.push_str(&format!("  {}\n", career.career_insights));
        }

        if let Some(ref gaps) = report.skill_gap_analysis {
            output.push_str("\nSkill Gaps:\n");
            for gap in &gaps.missing_skills {
                output.push_str(&format!("  - {} [{}]: {}\n", gap.skill, gap.priority, gap.reason));
            }
            output.push_str(&format!("  {}\n", gaps.gap_analysis));
        }

        if let Some(ref roadmap) = report.learning_roadmap {
            output.push_str(&format!(
                "\nLearning Roadmap ({} months):\n",
                roadmap.roadmap_duration
            ));
            for goal in &roadmap.monthly_goals {
                output.push_str(&format!(
                    "  Month {}: {}\n",
                    goal.month,
                    goal.focus_areas.join(", ")
                ));
                for project in &goal.practice_projects {
                    output.push_str(&format!("    project: {}\n", project));
                }
            }
            output.push_str(&format!("  Strategy: {}\n", roadmap.overall_strategy));
        }

        if let Some(ref interview) = report.interview_preparation {
            output.push_str("\nInterview Preparation:\n");
            for question in &interview.technical_questions {
                output.push_str(&format!(
                    "  [{}] {} ({})\n",
                    question.difficulty, question.question, question.category
                ));
            }
            for question in &interview.behavioral_questions {
                output.push_str(&format!(
                    "  [{}] {}\n",
                    question.focus_area, question.question
                ));
            }
            for tip in &interview.preparation_tips {
                output.push_str(&format!("  tip: {}\n", tip));
            }
        }
    }

    let stage_errors = report.stage_errors();
    if !report.errors.is_empty() || !stage_errors.is_empty() {
        output.push_str("\nErrors:\n");
        for (stage, error) in stage_errors {
            output.push_str(&format!("  {}: {}\n", stage, error));
        }
        for error in &report.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &Report, summary: &Summary, summary_only: bool) -> String {
    let mut output = String::new();

    output.push_str("# Career Mentoring Report\n\n");
    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Resume Strength | {:.1}/10 |\n", summary.resume_strength));
    output.push_str(&format!("| Recommended Role | {} |\n", summary.recommended_role));
    if let Some(ref role) = report.target_role {
        output.push_str(&format!("| Target Role | {} |\n", role));
    }
    output.push_str(&format!("| Readiness Score | {:.1}/10 |\n", summary.readiness_score));
    output.push_str(&format!("| Skill Gaps | {} |\n", summary.total_skill_gaps));
    output.push_str(&format!("| Roadmap | {} months |\n", summary.roadmap_duration));
    output.push_str(&format!(
        "| Interview Questions | {} technical / {} behavioral |\n",
        summary.interview_questions_generated.technical,
        summary.interview_questions_generated.behavioral
    ));

    if !summary_only {
        if let Some(ref career) = report.career_recommendations {
            output.push_str("\n## Career Recommendations\n\n");
            output.push_str("| Role | Match | Reasoning |\n|------|-------|-----------|\n");
            for role in std::iter::once(&career.best_fit_role).chain(&career.alternative_roles) {
                output.push_str(&format!(
                    "| {} | {:.1} | {} |\n",
                    role.title, role.match_score, role.reasoning
                ));
            }
            output.push_str(&format!("\n> {}\n", career.career_insights));
        }

        if let Some(ref gaps) = report.skill_gap_analysis {
            output.push_str("\n## Skill Gaps\n\n");
            output.push_str("| Skill | Priority | Reason |\n|-------|----------|--------|\n");
            for gap in &gaps.missing_skills {
                output.push_str(&format!("| {} | {} | {} |\n", gap.skill, gap.priority, gap.reason));
            }
            output.push_str(&format!("\n{}\n", gaps.gap_analysis));
        }

        if let Some(ref roadmap) = report.learning_roadmap {
            output.push_str(&format!(
                "\n## Learning Roadmap: {} ({} months)\n\n",
                roadmap.target_role, roadmap.roadmap_duration
            ));
            for goal in &roadmap.monthly_goals {
                output.push_str(&format!("### Month {}\n\n", goal.month));
                output.push_str(&format!("- **Focus:** {}\n", goal.focus_areas.join(", ")));
                output.push_str(&format!(
                    "- **Skills:** {}\n",
                    goal.skills_to_acquire.join(", ")
                ));
                output.push_str(&format!(
                    "- **Projects:** {}\n",
                    goal.practice_projects.join(", ")
                ));
                output.push_str(&format!("- **Resources:** {}\n\n", goal.resources.join(", ")));
            }
            output.push_str(&format!("**Strategy:** {}\n", roadmap.overall_strategy));
        }

        if let Some(ref interview) = report.interview_preparation {
            output.push_str("\n## Interview Preparation\n\n");
            output.push_str("| Difficulty | Category | Question |\n|------------|----------|----------|\n");
            for question in &interview.technical_questions {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    question.difficulty, question.category, question.question
                ));
            }
            if !interview.behavioral_questions.is_empty() {
                output.push_str("\n### Behavioral\n\n");
                for question in &interview.behavioral_questions {
                    output.push_str(&format!(
                        "- **{}**: {}\n",
                        question.focus_area, question.question
                    ));
                }
            }
            if !interview.preparation_tips.is_empty() {
                output.push_str("\n### Tips\n\n");
                for tip in &interview.preparation_tips {
                    output.push_str(&format!("- {}\n", tip));
                }
            }
        }
    }

    let stage_errors = report.stage_errors();
    if !report.errors.is_empty() || !stage_errors.is_empty() {
        output.push_str("\n## Errors\n\n");
        for (stage, error) in stage_errors {
            output.push_str(&format!("- **{}**: {}\n", stage, error));
        }
        for error in &report.errors {
            output.push_str(&format!("- {}\n", error));
        }
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
