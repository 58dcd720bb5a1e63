use crate::analysis::prompts::{fill_template, COMPARISON_PROMPT_TEMPLATE};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::resume::{JobTitle, ResumeText};

/// Asks for a match score, missing skills, experience alignment, and
/// recommendations against `job_title`. Returns the raw reply.
pub async fn compare_with_job_title(
    llm: &dyn TextGenerator,
    resume: &ResumeText,
    job_title: &JobTitle,
) -> Result<String, LlmError> {
    let prompt = fill_template(
        COMPARISON_PROMPT_TEMPLATE,
        &[
            ("job_title", job_title.as_str()),
            ("resume_text", resume.as_str()),
        ],
    );
    llm.generate(&prompt).await
}
