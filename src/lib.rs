pub mod config;
pub mod error;
pub mod models;
pub mod llm;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use llm::{GeminiProvider, LLMProvider};
pub use analysis::Orchestrator;
pub use models::{Report, Summary};
