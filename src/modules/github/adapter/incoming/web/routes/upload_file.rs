// src/modules/github/adapter/incoming/web/routes/upload_file.rs

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::admin::AdminOperator;
use crate::github::application::ports::incoming::use_cases::PublishError;
use crate::shared::api::{upstream_passthrough, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest {
    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub base64: String,

    #[serde(default)]
    pub commit_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadFileResponse {
    pub success: bool,
    pub url: String,
    pub data: Value,
}

/// `public/...` in the repository maps to the site root when served.
fn public_url(file_path: &str) -> String {
    match file_path.strip_prefix("public/") {
        Some(rest) => format!("/{}", rest),
        None => format!("/{}", file_path),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Pre-encoded content (images) committed straight to a repo path.
//

#[post("/api/github-upload-image")]
pub async fn upload_file_handler(
    _admin: AdminOperator,
    req: web::Json<UploadFileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.file_path.is_empty() || req.base64.is_empty() {
        return ApiResponse::bad_request("MISSING_FIELDS", "Missing filePath or base64");
    }
    let commit_message = req
        .commit_message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Upload image {} via admin", req.file_path));

    match data
        .publish_file
        .publish_base64(&req.file_path, &req.base64, &commit_message)
        .await
    {
        Ok(provider_payload) => actix_web::HttpResponse::Ok().json(UploadFileResponse {
            success: true,
            url: public_url(&req.file_path),
            data: provider_payload,
        }),
        Err(PublishError::MissingToken) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(PublishError::Upstream { status, body }) => upstream_passthrough(status, body),
        Err(PublishError::Transport(msg)) => {
            error!("Failed to upload {}: {}", req.file_path, msg);
            ApiResponse::internal_error()
        }
    }
}
