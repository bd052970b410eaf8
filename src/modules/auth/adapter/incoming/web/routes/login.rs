// src/modules/auth/adapter/incoming/web/routes/login.rs

use actix_web::{post, Responder};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::admin::AdminOperator;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// The admin panel probes this with the operator's Basic credentials; the
/// extractor does the actual check.
#[post("/api/admin/login")]
pub async fn admin_login_handler(admin: AdminOperator) -> impl Responder {
    ApiResponse::success(LoginResponse {
        username: admin.username,
    })
}
