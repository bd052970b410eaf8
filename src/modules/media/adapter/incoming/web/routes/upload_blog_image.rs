// src/modules/media/adapter/incoming/web/routes/upload_blog_image.rs

use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::media::adapter::incoming::web::multipart::read_upload_form;
use crate::media::application::filenames::slugged_image_name;
use crate::media::application::ports::outgoing::ImageStoreError;
use crate::shared::api::{upstream_passthrough, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    pub image: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Blog images are stored locally; the file name comes from the row title.
//

#[post("/api/blogs/image")]
pub async fn upload_blog_image_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_upload_form(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::bad_request("INVALID_BODY", &e.to_string()),
    };

    let title = form.text("title").unwrap_or("blog").to_string();
    let Some(file) = form.file else {
        return ApiResponse::bad_request("NO_IMAGE_FILE", "No image file provided");
    };
    let file_name = slugged_image_name(&title, &file.file_name);

    match data.blog_image_store.store(&file_name, file.bytes).await {
        Ok(image) => actix_web::HttpResponse::Ok().json(UploadImageResponse { image }),
        Err(ImageStoreError::Upstream { status, body }) => upstream_passthrough(status, body),
        Err(ImageStoreError::MissingCredential) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(ImageStoreError::Io(msg)) => {
            error!("Failed to store blog image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
