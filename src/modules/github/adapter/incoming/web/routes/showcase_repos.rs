// src/modules/github/adapter/incoming/web/routes/showcase_repos.rs

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::github::application::ports::incoming::use_cases::ShowcaseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Repository cards for the public showcase panel. The list is the raw
/// response body, matching the other public reads.
#[get("/api/github-repos")]
pub async fn showcase_repos_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_showcase_repos.execute().await {
        Ok(cards) => HttpResponse::Ok().json(cards),
        Err(ShowcaseError::MissingToken) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(ShowcaseError::FetchFailed) => {
            error!("Showcase repo listing failed");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "FETCH_FAILED",
                "Failed to fetch repos",
            )
        }
    }
}
