use crate::analysis::prompts::RATING_PROMPT_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::resume::ResumeText;

/// Asks for a `X/10` rating with strengths and improvements.
/// Returns the raw reply; formatting and section checks happen downstream.
pub async fn rate_resume(llm: &dyn TextGenerator, resume: &ResumeText) -> Result<String, LlmError> {
    let prompt = RATING_PROMPT_TEMPLATE.replace("{resume_text}", resume.as_str());
    llm.generate(&prompt).await
}
