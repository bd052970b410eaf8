// src/modules/media/adapter/incoming/web/routes/upload_resume.rs

use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use base64::Engine;
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::admin::AdminOperator;
use crate::github::application::ports::incoming::use_cases::PublishError;
use crate::media::adapter::incoming::web::multipart::read_upload_form;
use crate::shared::api::{upstream_passthrough, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub success: bool,
    pub path: String,
}

/// `public/...` in the repository is served from the site root.
fn public_path(repo_path: &str) -> String {
    match repo_path.strip_prefix("public/") {
        Some(rest) => format!("/{}", rest),
        None => format!("/{}", repo_path),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/resume")]
pub async fn upload_resume_handler(
    _admin: AdminOperator,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_upload_form(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::bad_request("INVALID_BODY", &e.to_string()),
    };

    let Some(file) = form.file else {
        return ApiResponse::bad_request("NO_FILE", "No file uploaded");
    };

    let repo_path = data.resume_repo_path.clone();
    let encoded = base64::engine::general_purpose::STANDARD.encode(file.bytes);

    match data
        .publish_file
        .publish_base64(&repo_path, &encoded, "Update resume PDF via admin")
        .await
    {
        Ok(_) => actix_web::HttpResponse::Ok().json(UploadResumeResponse {
            success: true,
            path: public_path(&repo_path),
        }),
        Err(PublishError::MissingToken) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(PublishError::Upstream { status, body }) => upstream_passthrough(status, body),
        Err(PublishError::Transport(msg)) => {
            error!("Failed to publish resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
