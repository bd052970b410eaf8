// src/modules/github/adapter/incoming/web/routes/update_file.rs

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
pub struct UpdateFileRequest {
    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub json: Option<Value>,

    #[serde(default)]
    pub commit_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateFileResponse {
    pub success: bool,
    pub data: Value,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// The generic commit path the 405-answering sections point at.
//

#[post("/api/github-update")]
pub async fn update_file_handler(
    _admin: AdminOperator,
    req: web::Json<UpdateFileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let json = match (&req.file_path, req.json) {
        (path, Some(json)) if !path.is_empty() => json,
        _ => {
            return ApiResponse::bad_request("MISSING_FIELDS", "Missing filePath or json");
        }
    };
    let commit_message = req
        .commit_message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Update {} via admin", req.file_path));

    match data
        .publish_file
        .publish_json(&req.file_path, &json, &commit_message)
        .await
    {
        Ok(provider_payload) => actix_web::HttpResponse::Ok().json(UpdateFileResponse {
            success: true,
            data: provider_payload,
        }),
        Err(PublishError::MissingToken) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(PublishError::Upstream { status, body }) => upstream_passthrough(status, body),
        Err(PublishError::Transport(msg)) => {
            error!("Failed to publish {}: {}", req.file_path, msg);
            ApiResponse::internal_error()
        }
    }
}
