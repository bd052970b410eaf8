// src/modules/content/adapter/incoming/web/routes/get_section.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::content::application::domain::sections::SectionKind;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// The document itself is the response body; only failures use the
// envelope. A missing document never 404s.
//

#[get("/api/{section}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(section) = SectionKind::from_slug(&path) else {
        return ApiResponse::error(
            actix_web::http::StatusCode::NOT_FOUND,
            "UNKNOWN_SECTION",
            "No such content section",
        );
    };

    match data.fetch_section.execute(section).await {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => {
            error!("Failed to read {} document: {}", section, e);
            ApiResponse::internal_error()
        }
    }
}
