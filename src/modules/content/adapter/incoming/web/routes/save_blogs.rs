// src/modules/content/adapter/incoming/web/routes/save_blogs.rs

use actix_multipart::Multipart;
use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use futures::StreamExt;
use serde_json::Value;

use crate::content::application::domain::sections::{BlogPost, SectionKind};
use crate::content::application::ports::incoming::use_cases::IncomingImage;
use crate::media::adapter::incoming::web::multipart::read_upload_form;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::save_section::save_error_response;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Two write paths on one route, distinguished by content type:
// multipart/form-data carries a single row (plus optional image) for the
// array-merge path; a JSON body replaces the whole array. Must be
// registered ahead of the generic /api/{section} POST.
//

#[post("/api/blogs")]
pub async fn save_blogs_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::new(req.headers(), payload);
        return merge_single_row(multipart, &data).await;
    }

    // Legacy whole-array path.
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(e) => {
                return ApiResponse::bad_request("INVALID_BODY", &e.to_string());
            }
        }
    }
    let document: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .save_section
        .execute(SectionKind::Blogs, document)
        .await
    {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => save_error_response(SectionKind::Blogs, e),
    }
}

async fn merge_single_row(multipart: Multipart, data: &web::Data<AppState>) -> HttpResponse {
    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::bad_request("INVALID_BODY", &e.to_string()),
    };

    let Some(raw) = form.text("data") else {
        return ApiResponse::bad_request("MISSING_BLOG_DATA", "Missing data form field");
    };
    let entry: BlogPost = match serde_json::from_str(raw) {
        Ok(entry) => entry,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let image = form.file.map(|file| IncomingImage {
        file_name: file.file_name,
        bytes: file.bytes,
    });

    match data.merge_blog_entry.execute(entry, image).await {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(e) => save_error_response(SectionKind::Blogs, e),
    }
}
