use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::llm::{generate_json, InterviewRequest, LLMProvider};
use crate::models::interview::InterviewReply;
use crate::models::InterviewPreparation;

use super::provider_from_config;

pub struct InterviewPrepGenerator {
    llm: Arc<dyn LLMProvider>,
}

impl InterviewPrepGenerator {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    pub async fn generate_questions(
        &self,
        target_role: &str,
        technical_skills: &[String],
        experience_summary: &str,
        num_technical: u32,
        num_behavioral: u32,
    ) -> InterviewPreparation {
        let prompt = InterviewRequest {
            target_role,
            technical_skills,
            experience_summary,
            num_technical,
            num_behavioral,
        }
        .to_prompt();

        match generate_json::<InterviewReply>(self.llm.as_ref(), &prompt).await {
            Ok(reply) => InterviewPreparation::from_reply(reply, target_role),
            Err(e) => {
                tracing::warn!("Interview preparation for '{}' failed: {}", target_role, e);
                InterviewPreparation::failed(target_role, e.to_string())
            }
        }
    }
}
