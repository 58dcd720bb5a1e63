//! Highlights Extraction: asks the model for a six-key JSON object and
//! interprets the reply. Any failure degrades to the sentinel record.

use tracing::warn;

use crate::analysis::prompts::HIGHLIGHTS_PROMPT_TEMPLATE;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::models::resume::{HighlightsRecord, ResumeText};

/// Either real highlights, or the sentinel plus the reason extraction failed.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightsOutcome {
    Extracted(HighlightsRecord),
    Fallback {
        record: HighlightsRecord,
        reason: String,
    },
}

impl HighlightsOutcome {
    fn fallback(reason: impl Into<String>) -> Self {
        HighlightsOutcome::Fallback {
            record: HighlightsRecord::sentinel(),
            reason: reason.into(),
        }
    }

    /// Always a complete record, real or sentinel.
    pub fn record(&self) -> &HighlightsRecord {
        match self {
            HighlightsOutcome::Extracted(record) => record,
            HighlightsOutcome::Fallback { record, .. } => record,
        }
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            HighlightsOutcome::Extracted(_) => None,
            HighlightsOutcome::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, HighlightsOutcome::Fallback { .. })
    }
}

pub async fn extract_resume_highlights(
    llm: &dyn TextGenerator,
    resume: &ResumeText,
) -> HighlightsOutcome {
    let prompt = HIGHLIGHTS_PROMPT_TEMPLATE.replace("{resume_text}", resume.as_str());

    let reply = match llm.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Highlights generation failed, using sentinel: {e}");
            return HighlightsOutcome::fallback(e.to_string());
        }
    };

    match interpret_highlights(&reply) {
        Ok(record) => HighlightsOutcome::Extracted(record),
        Err(e) => {
            warn!("Highlights reply was not valid JSON, using sentinel: {e}");
            HighlightsOutcome::fallback(e.to_string())
        }
    }
}

/// Strips code fences and parses the reply. No partial recovery.
pub fn interpret_highlights(reply: &str) -> Result<HighlightsRecord, LlmError> {
    Ok(serde_json::from_str(strip_json_fences(reply))?)
}
