//! Display-ready shapes for the page's tabs.

use serde::Serialize;

use crate::analysis::highlights::HighlightsOutcome;
use crate::models::resume::UNABLE_TO_EXTRACT;

pub const MAX_SKILLS_SHOWN: usize = 10;
pub const MAX_PROJECTS_SHOWN: usize = 5;
pub const MAX_KEYWORDS_SHOWN: usize = 8;

/// Highlights as shown on the Highlights tab. Empty lists render as
/// "No ... detected"; sentinel placeholders are mapped to empty lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightsView {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub keywords: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub experience_years: String,
    pub degraded: bool,
    pub degraded_reason: Option<String>,
}

impl HighlightsView {
    pub fn from_outcome(outcome: &HighlightsOutcome) -> Self {
        let record = outcome.record();
        Self {
            skills: shown(&record.skills, Some(MAX_SKILLS_SHOWN)),
            projects: shown(&record.projects, Some(MAX_PROJECTS_SHOWN)),
            keywords: shown(&record.keywords, Some(MAX_KEYWORDS_SHOWN)),
            education: shown(&record.education, None),
            certifications: shown(&record.certifications, None),
            experience_years: record.experience_years.clone(),
            degraded: outcome.is_fallback(),
            degraded_reason: outcome.fallback_reason().map(String::from),
        }
    }
}

fn shown(items: &[String], limit: Option<usize>) -> Vec<String> {
    if items.first().map(String::as_str) == Some(UNABLE_TO_EXTRACT) {
        return Vec::new();
    }
    let limit = limit.unwrap_or(items.len());
    items.iter().take(limit).cloned().collect()
}
