pub mod provider;
pub mod gemini;
pub mod prompts;
pub mod parser;

#[cfg(test)]
pub(crate) mod testing;

pub use provider::{generate_json, LLMProvider};
pub use gemini::GeminiProvider;
pub use parser::{parse_json, strip_code_fences};
pub use prompts::{CareerRequest, InterviewRequest, ResumeRequest, RoadmapRequest, SkillGapRequest};
