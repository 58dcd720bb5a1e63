//! Heading schema shared by the rating and comparison prompts, plus a
//! structural check of model replies against it.
//!
//! The check never rejects a reply. It reports which headings are missing and
//! the headline score, so callers can surface drift next to the text.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

/// Marker that opens a section heading line.
pub const HEADING_MARKER: &str = "## ";
/// Marker that opens a bolded bullet item.
pub const BULLET_MARKER: &str = "• **";

pub const RATING_HEADINGS: [&str; 4] = [
    "⭐ Resume Rating",
    "📝 Analysis",
    "💪 Top Strengths",
    "🔧 Areas for Improvement",
];

pub const COMPARISON_HEADINGS: [&str; 4] = [
    "🎯 Match Score",
    "🚫 Missing Skills",
    "📊 Experience Alignment",
    "💡 Recommendations",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Rating,
    Comparison,
}

impl ReportKind {
    pub fn headings(self) -> &'static [&'static str] {
        match self {
            ReportKind::Rating => &RATING_HEADINGS,
            ReportKind::Comparison => &COMPARISON_HEADINGS,
        }
    }

    /// Largest value the headline score may take (10 for `X/10`, 100 for `X%`).
    fn score_ceiling(self) -> u32 {
        match self {
            ReportKind::Rating => 10,
            ReportKind::Comparison => 100,
        }
    }

    fn score_pattern(self) -> &'static Regex {
        static RATING: OnceLock<Regex> = OnceLock::new();
        static PERCENT: OnceLock<Regex> = OnceLock::new();
        match self {
            ReportKind::Rating => RATING.get_or_init(|| {
                Regex::new(r"\b(\d{1,2})(?:\.\d+)?\s*/\s*10\b").expect("valid rating regex")
            }),
            ReportKind::Comparison => PERCENT.get_or_init(|| {
                Regex::new(r"\b(\d{1,3})(?:\.\d+)?\s*%").expect("valid percent regex")
            }),
        }
    }
}

/// Result of checking a reply against the expected heading schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCheck {
    pub missing_headings: Vec<String>,
    pub score: Option<u32>,
}

impl SectionCheck {
    pub fn is_complete(&self) -> bool {
        self.missing_headings.is_empty() && self.score.is_some()
    }
}

pub fn check_sections(text: &str, kind: ReportKind) -> SectionCheck {
    let heading_lines: Vec<String> = text
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    let missing_headings: Vec<String> = kind
        .headings()
        .iter()
        .filter(|heading| {
            let label = heading_label(heading).to_lowercase();
            !heading_lines.iter().any(|line| line.contains(&label))
        })
        .map(|heading| heading.to_string())
        .collect();

    let score = kind
        .score_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .find(|value| *value <= kind.score_ceiling());

    let check = SectionCheck {
        missing_headings,
        score,
    };
    if !check.is_complete() {
        warn!(
            "{:?} reply drifted from heading schema: missing={:?}, score={:?}",
            kind, check.missing_headings, check.score
        );
    }
    check
}

/// The words of a heading without its leading emoji, e.g. "Match Score".
fn heading_label(heading: &str) -> &str {
    heading
        .split_once(' ')
        .map(|(_, label)| label)
        .unwrap_or(heading)
}
