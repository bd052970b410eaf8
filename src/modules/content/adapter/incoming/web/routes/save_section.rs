// src/modules/content/adapter/incoming/web/routes/save_section.rs

use actix_web::{post, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::error;

use crate::content::application::domain::sections::SectionKind;
use crate::content::application::ports::incoming::use_cases::SaveSectionError;
use crate::shared::api::{upstream_passthrough, ApiResponse};
use crate::AppState;

pub(super) fn save_error_response(section: SectionKind, err: SaveSectionError) -> HttpResponse {
    match err {
        SaveSectionError::DirectWriteNotSupported(_) => ApiResponse::method_not_allowed(
            "DIRECT_WRITE_NOT_SUPPORTED",
            "Direct file writes are not supported in production. Use /api/github-update.",
        ),
        SaveSectionError::ReadOnlySection(_) => {
            ApiResponse::method_not_allowed("READ_ONLY_SECTION", "This section is read-only")
        }
        SaveSectionError::MalformedDocument(msg) => {
            ApiResponse::bad_request("MALFORMED_DOCUMENT", &msg)
        }
        SaveSectionError::MissingCredential => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        SaveSectionError::Upstream { status, body } => upstream_passthrough(status, body),
        SaveSectionError::StorageError(msg) => {
            error!("Failed to write {} document: {}", section, msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                &format!("Failed to write {}", section.file_name()),
            )
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Whole-document replace. /api/blogs registers its own handler ahead of
// this one to add the multipart merge path.
//

#[post("/api/{section}")]
pub async fn save_section_handler(
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(section) = SectionKind::from_slug(&path) else {
        return ApiResponse::error(
            actix_web::http::StatusCode::NOT_FOUND,
            "UNKNOWN_SECTION",
            "No such content section",
        );
    };

    match data.save_section.execute(section, body.into_inner()).await {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => save_error_response(section, e),
    }
}
