//! Axum route handlers for the upload and analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::comparison::compare_with_job_title;
use crate::analysis::format::format_analysis_output;
use crate::analysis::highlights::extract_resume_highlights;
use crate::analysis::rating::rate_resume;
use crate::analysis::sections::{check_sections, ReportKind, SectionCheck};
use crate::analysis::summary::generate_professional_summary;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::models::resume::{JobTitle, ResumeText};
use crate::state::AppState;
use crate::ui::views::HighlightsView;

/// Multipart field carrying the resume file.
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub resume_text: String,
    pub characters: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub text: String,
    pub sections: SectionCheck,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub job_title: String,
    pub text: String,
    pub sections: SectionCheck,
}

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/extract
///
/// Accepts a multipart upload (field `file`, PDF or DOCX) and returns its text.
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;

    let kind = DocumentKind::detect(upload.content_type.as_deref(), upload.file_name.as_deref())
        .ok_or_else(|| {
            AppError::UnsupportedMediaType(
                upload
                    .content_type
                    .clone()
                    .or_else(|| upload.file_name.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })?;

    let text = extract_text(upload.data, kind).await?;
    let resume = ResumeText::new(text)?;

    info!(
        "Extracted {} chars from {:?} upload {:?}",
        resume.char_count(),
        kind,
        upload.file_name
    );

    Ok(Json(ExtractResponse {
        file_name: upload.file_name,
        characters: resume.char_count(),
        resume_text: resume.as_str().to_string(),
    }))
}

/// POST /api/v1/analysis/highlights
///
/// Never fails on model errors: a failed extraction returns the sentinel
/// view with `degraded: true`.
pub async fn handle_highlights(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<HighlightsView>, AppError> {
    let resume = resume_from_request(request.resume_text)?;
    let outcome = extract_resume_highlights(state.llm.as_ref(), &resume).await;
    Ok(Json(HighlightsView::from_outcome(&outcome)))
}

/// POST /api/v1/analysis/rating
pub async fn handle_rating(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let resume = resume_from_request(request.resume_text)?;
    let raw = rate_resume(state.llm.as_ref(), &resume).await?;

    let text = format_analysis_output(&raw);
    let sections = check_sections(&text, ReportKind::Rating);
    Ok(Json(ReportResponse { text, sections }))
}

/// POST /api/v1/analysis/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let resume = resume_from_request(request.resume_text)?;
    let summary = generate_professional_summary(state.llm.as_ref(), &resume).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/analysis/compare
///
/// The job title is validated before any model call is made.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let job_title = JobTitle::parse(&request.job_title)?;
    let resume = resume_from_request(request.resume_text)?;

    info!("Comparing resume against '{job_title}'");
    let raw = compare_with_job_title(state.llm.as_ref(), &resume, &job_title).await?;

    let text = format_analysis_output(&raw);
    let sections = check_sections(&text, ReportKind::Comparison);
    Ok(Json(CompareResponse {
        job_title: job_title.to_string(),
        text,
        sections,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn resume_from_request(text: String) -> Result<ResumeText, AppError> {
    ResumeText::new(text)
        .map_err(|_| AppError::Validation("resume_text cannot be empty".to_string()))
}

/// Reads the `file` field. Files over `max_bytes` are rejected with 413,
/// whether the router's body limit or the size check below catches them.
async fn read_upload(mut multipart: Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    let upload_error = |e: MultipartError, context: &str| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(max_bytes)
        } else {
            AppError::Validation(format!("{context}: {e}"))
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, "Invalid multipart upload"))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, "Failed to read upload"))?;
        if data.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(max_bytes));
        }

        return Ok(Upload {
            file_name,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}
