use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ROADMAP_MONTHS: u32 = 6;
pub const DEFAULT_TECHNICAL_QUESTIONS: u32 = 10;
pub const DEFAULT_BEHAVIORAL_QUESTIONS: u32 = 8;

const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub roadmap_months: u32,
    pub num_technical_questions: u32,
    pub num_behavioral_questions: u32,
}

impl Config {
    /// Builds a config around an explicit credential, everything else defaulted.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(missing_key());
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
            roadmap_months: DEFAULT_ROADMAP_MONTHS,
            num_technical_questions: DEFAULT_TECHNICAL_QUESTIONS,
            num_behavioral_questions: DEFAULT_BEHAVIORAL_QUESTIONS,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or_else(missing_key)?;
        let mut config = Self::new(api_key)?;

        if let Some(model) = lookup("GEMINI_MODEL").filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }

        if let Some(base_url) = lookup("GEMINI_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        config.request_timeout_secs = lookup("LLM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.request_timeout_secs);

        config.roadmap_months = lookup("ROADMAP_MONTHS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.roadmap_months);

        config.num_technical_questions = lookup("NUM_TECHNICAL_QUESTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.num_technical_questions);

        config.num_behavioral_questions = lookup("NUM_BEHAVIORAL_QUESTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.num_behavioral_questions);

        Ok(config)
    }
}

fn missing_key() -> Error {
    Error::Config(format!(
        "Google API key is required. Set {} environment variable.",
        API_KEY_VAR
    ))
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub num_technical_questions: u32,
    pub num_behavioral_questions: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_technical_questions: DEFAULT_TECHNICAL_QUESTIONS,
            num_behavioral_questions: DEFAULT_BEHAVIORAL_QUESTIONS,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            num_technical_questions: config.num_technical_questions,
            num_behavioral_questions: config.num_behavioral_questions,
        }
    }
}
