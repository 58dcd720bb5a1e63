use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// Placeholder used in every list field of the sentinel record.
pub const UNABLE_TO_EXTRACT: &str = "Unable to extract";
/// Placeholder used for `experience_years` in the sentinel record.
pub const UNKNOWN_EXPERIENCE: &str = "Unknown";

/// Full plain text of an uploaded resume. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText(String);

impl ResumeText {
    /// Wraps extracted or client-supplied text, rejecting whitespace-only input.
    pub fn new(text: impl Into<String>) -> Result<Self, AppError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AppError::NoReadableContent);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Target role for the job comparison prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitle(String);

impl JobTitle {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("job_title cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured highlights pulled from a resume by the model.
/// All six keys are required; a reply missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightsRecord {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub experience_years: String,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

impl HighlightsRecord {
    /// The static record returned whenever highlights cannot be extracted.
    pub fn sentinel() -> Self {
        let unable = || vec![UNABLE_TO_EXTRACT.to_string()];
        Self {
            skills: unable(),
            projects: unable(),
            keywords: unable(),
            experience_years: UNKNOWN_EXPERIENCE.to_string(),
            education: unable(),
            certifications: unable(),
        }
    }
}

/// Models often emit `"experience_years": 5` instead of a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
