//! Presentation layer: the single tabbed HTML page.
//! The page keeps the extracted resume text client-side and calls the JSON
//! analysis API for each tab.

pub mod views;

use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub version: &'static str,
    pub max_upload_mb: usize,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage {
        version: env!("CARGO_PKG_VERSION"),
        max_upload_mb: state.config.max_upload_bytes.div_ceil(1024 * 1024),
    };
    Ok(Html(page.render()?))
}
