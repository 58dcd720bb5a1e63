use crate::analysis::prompts::SUMMARY_PROMPT_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::resume::ResumeText;

/// Asks for a two-sentence professional summary and returns it trimmed.
/// Sentence count is not enforced.
pub async fn generate_professional_summary(
    llm: &dyn TextGenerator,
    resume: &ResumeText,
) -> Result<String, LlmError> {
    let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume.as_str());
    let reply = llm.generate(&prompt).await?;
    Ok(reply.trim().to_string())
}
