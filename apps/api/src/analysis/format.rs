//! Output Formatter: normalizes heading and bullet spacing of free-text
//! model replies before display.
//!
//! Rules:
//! 1. `## ` headings and `• **` bullets always start their own line.
//! 2. Every heading line is preceded by exactly one blank line.
//! 3. Runs of blank lines collapse to a single empty line.
//! 4. The result is trimmed.
//!
//! The transform is idempotent.

use crate::analysis::sections::{BULLET_MARKER, HEADING_MARKER};

pub fn format_analysis_output(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = break_before_markers(&text);

    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            // Drop leading blanks and anything following another blank.
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push("");
            }
            continue;
        }
        if is_heading(line) && lines.last().is_some_and(|last| !last.is_empty()) {
            lines.push("");
        }
        lines.push(line);
    }

    lines.join("\n").trim().to_string()
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with(HEADING_MARKER)
}

/// Inserts a newline before every marker that has other text ahead of it on
/// the same line, dropping the spaces the break leaves dangling. Leading
/// indentation does not count as text.
fn break_before_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut line_start = 0;

    for (i, ch) in text.char_indices() {
        let rest = &text[i..];
        // `### ` contains `## `; only the outermost marker counts.
        let at_marker = (rest.starts_with(HEADING_MARKER) && !out.ends_with('#'))
            || rest.starts_with(BULLET_MARKER);

        if at_marker && !out[line_start..].trim().is_empty() {
            let kept = out.trim_end_matches([' ', '\t']).len();
            out.truncate(kept);
            out.push('\n');
            line_start = out.len();
        }

        out.push(ch);
        if ch == '\n' {
            line_start = out.len();
        }
    }

    out
}
