use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{generate_json, LLMProvider, ResumeRequest};
use crate::models::ResumeAnalysis;

use super::provider_from_config;

/// Pulls skills, experience and a strength rating out of raw resume text.
pub struct ResumeAnalyzer {
    llm: Arc<dyn LLMProvider>,
}

impl ResumeAnalyzer {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// Never fails: a bad reply becomes an empty analysis carrying `error`.
    pub async fn analyze(&self, resume_text: &str) -> ResumeAnalysis {
        let prompt = ResumeRequest { resume_text }.to_prompt();

        match generate_json::<ResumeAnalysis>(self.llm.as_ref(), &prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Resume analysis failed: {}", e);
                let summary = if e.is_parse_error() {
                    "Error parsing resume".to_string()
                } else {
                    format!("Error analyzing resume: {}", e)
                };
                ResumeAnalysis::failed(summary, e.to_string())
            }
        }
    }
}
