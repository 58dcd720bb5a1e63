pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/analysis/highlights",
            post(handlers::handle_highlights),
        )
        .route("/api/v1/analysis/rating", post(handlers::handle_rating))
        .route("/api/v1/analysis/summary", post(handlers::handle_summary))
        .route("/api/v1/analysis/compare", post(handlers::handle_compare))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::{docx_fixture, pdf_fixture, DOCX_MIME, PDF_MIME};
    use crate::llm_client::testing::ScriptedGenerator;

    const BOUNDARY: &str = "resume-analyzer-test-boundary";

    fn app(llm: Arc<ScriptedGenerator>) -> Router {
        build_router(AppState {
            llm,
            config: Config::for_tests(),
        })
    }

    fn app_with_upload_limit(max_upload_bytes: usize) -> Router {
        build_router(AppState {
            llm: Arc::new(ScriptedGenerator::default()),
            config: Config {
                max_upload_bytes,
                ..Config::for_tests()
            },
        })
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_request(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/extract")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_page_lists_all_tabs() {
        let response = app(Arc::default())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        for tab in ["Overview", "Rating", "Summary Generator", "Job Comparison"] {
            assert!(html.contains(tab), "missing tab {tab}");
        }
    }

    #[tokio::test]
    async fn test_index_page_reruns_analysis_on_every_tab_visit() {
        let response = app(Arc::default())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(html.contains("if (loaders[name] && resumeText !== null) loaders[name]();"));
        assert!(!html.contains("loaded[name]"));
    }

    #[tokio::test]
    async fn test_extract_docx_upload() {
        let data = docx_fixture(&["Jane Doe", "Rust, Go, SQL"]);
        let response = app(Arc::default())
            .oneshot(upload_request("cv.docx", DOCX_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["resume_text"], "Jane Doe\nRust, Go, SQL");
        assert_eq!(body["file_name"], "cv.docx");
        assert_eq!(body["characters"], 22);
    }

    #[tokio::test]
    async fn test_extract_empty_document_reports_no_readable_content() {
        let data = docx_fixture(&["", "   "]);
        let response = app(Arc::default())
            .oneshot(upload_request("blank.docx", DOCX_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "NO_READABLE_CONTENT"
        );
    }

    #[tokio::test]
    async fn test_extract_pdf_upload() {
        let data = pdf_fixture(&["Jane Doe", "Rust Engineer"]);
        let response = app(Arc::default())
            .oneshot(upload_request("cv.pdf", PDF_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_json(response).await["resume_text"]
            .as_str()
            .unwrap()
            .to_string();
        let first = text.find("Jane Doe").unwrap();
        let second = text.find("Rust Engineer").unwrap();
        assert!(text[first..second].contains('\n'));
    }

    #[tokio::test]
    async fn test_extract_textless_pdf_reports_no_readable_content() {
        let data = pdf_fixture(&[""]);
        let response = app(Arc::default())
            .oneshot(upload_request("scan.pdf", PDF_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "NO_READABLE_CONTENT"
        );
    }

    #[tokio::test]
    async fn test_extract_file_at_limit_is_not_rejected_for_size() {
        let data = vec![b'x'; 4096];
        let response = app_with_upload_limit(4096)
            .oneshot(upload_request("cv.pdf", PDF_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_extract_file_over_limit_is_payload_too_large() {
        let data = vec![b'x'; 4097];
        let response = app_with_upload_limit(4096)
            .oneshot(upload_request("cv.pdf", PDF_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_extract_body_over_router_limit_is_payload_too_large() {
        let data = vec![b'x'; 4096 + MULTIPART_OVERHEAD_BYTES + 1];
        let response = app_with_upload_limit(4096)
            .oneshot(upload_request("cv.pdf", PDF_MIME, &data))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_extract_corrupt_file_reports_processing_error() {
        let response = app(Arc::default())
            .oneshot(upload_request("cv.pdf", "application/pdf", b"definitely not a pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_extract_rejects_unsupported_type() {
        let response = app(Arc::default())
            .oneshot(upload_request("cv.txt", "text/plain", b"plain text resume"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_highlights_fenced_reply_truncated_for_display() {
        let skills: Vec<String> = (1..=15).map(|i| format!("Skill {i}")).collect();
        let reply = format!(
            "```json\n{}\n```",
            json!({
                "skills": skills,
                "projects": ["Compiler"],
                "keywords": ["Rust"],
                "experience_years": "5",
                "education": ["BSc"],
                "certifications": []
            })
        );
        let llm = Arc::new(ScriptedGenerator::replying(&reply));

        let response = app(llm.clone())
            .oneshot(json_request(
                "/api/v1/analysis/highlights",
                json!({"resume_text": "Jane Doe, Rust engineer"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["skills"].as_array().unwrap().len(), 10);
        assert_eq!(body["experience_years"], "5");
        assert_eq!(body["degraded"], false);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_highlights_model_failure_degrades() {
        let llm = Arc::new(ScriptedGenerator::failing("unavailable"));
        let response = app(llm)
            .oneshot(json_request(
                "/api/v1/analysis/highlights",
                json!({"resume_text": "Jane Doe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["degraded"], true);
        assert_eq!(body["experience_years"], "Unknown");
        assert!(body["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rating_is_formatted_and_checked() {
        let llm = Arc::new(ScriptedGenerator::replying(
            "## ⭐ Resume Rating **8/10** - Strong ## 📝 Analysis Clear.\n\n\n\n\
             ## 💪 Top Strengths • **Metrics**: yes ## 🔧 Areas for Improvement • **Summary**: add",
        ));
        let response = app(llm)
            .oneshot(json_request(
                "/api/v1/analysis/rating",
                json!({"resume_text": "Jane Doe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let text = body["text"].as_str().unwrap();
        assert!(text.starts_with("## ⭐ Resume Rating **8/10** - Strong\n\n## 📝 Analysis"));
        assert!(text.contains("\n• **Metrics**: yes"));
        assert!(!text.contains("\n\n\n"));
        assert_eq!(body["sections"]["score"], 8);
        assert_eq!(body["sections"]["missing_headings"], json!([]));
    }

    #[tokio::test]
    async fn test_rating_model_failure_is_bad_gateway() {
        let llm = Arc::new(ScriptedGenerator::failing("boom"));
        let response = app(llm)
            .oneshot(json_request(
                "/api/v1/analysis/rating",
                json!({"resume_text": "Jane Doe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_summary_trimmed() {
        let llm = Arc::new(ScriptedGenerator::replying("  Ships fast. Leads well.\n"));
        let response = app(llm)
            .oneshot(json_request(
                "/api/v1/analysis/summary",
                json!({"resume_text": "Jane Doe"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["summary"], "Ships fast. Leads well.");
    }

    #[tokio::test]
    async fn test_compare_with_empty_job_title_makes_no_model_call() {
        let llm = Arc::new(ScriptedGenerator::replying("should not be used"));

        for body in [
            json!({"resume_text": "Jane Doe", "job_title": "   "}),
            json!({"resume_text": "Jane Doe"}),
        ] {
            let response = app(llm.clone())
                .oneshot(json_request("/api/v1/analysis/compare", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert!(body.get("text").is_none());
        }

        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_compare_reports_match_score() {
        let llm = Arc::new(ScriptedGenerator::replying(
            "## 🎯 Match Score\n**72%** - close\n## 🚫 Missing Skills\n• **Spark**: needed",
        ));
        let response = app(llm.clone())
            .oneshot(json_request(
                "/api/v1/analysis/compare",
                json!({"resume_text": "Jane Doe", "job_title": " Data Engineer "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["job_title"], "Data Engineer");
        assert_eq!(body["sections"]["score"], 72);
        assert_eq!(
            body["sections"]["missing_headings"],
            json!(["📊 Experience Alignment", "💡 Recommendations"])
        );
        assert!(llm.last_prompt().unwrap().contains("\"Data Engineer\""));
    }

    #[tokio::test]
    async fn test_blank_resume_text_rejected() {
        let llm = Arc::new(ScriptedGenerator::default());
        let response = app(llm.clone())
            .oneshot(json_request(
                "/api/v1/analysis/summary",
                json!({"resume_text": "  \n "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(llm.calls(), 0);
    }
}
