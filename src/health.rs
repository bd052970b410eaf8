use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::content::application::paths::ContentPaths;
use crate::github::application::config::GithubConfig;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_store: &'static str,
    commit_provider: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content documents must be readable; the commit provider is reported
///   but read-only operation without it is still ready.
#[get("/ready")]
pub async fn readiness(
    paths: web::Data<ContentPaths>,
    github: web::Data<GithubConfig>,
) -> impl Responder {
    let content_status = if paths.data_dir.is_dir() {
        "ok"
    } else {
        "unavailable"
    };

    let commit_status = if github.is_configured() {
        "ok"
    } else {
        "unconfigured"
    };

    if content_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: content_status,
            commit_provider: commit_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_store: content_status,
            commit_provider: commit_status,
        })
    }
}
