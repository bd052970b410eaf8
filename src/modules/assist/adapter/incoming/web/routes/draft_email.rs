// src/modules/assist/adapter/incoming/web/routes/draft_email.rs

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::assist::application::ports::incoming::use_cases::DraftEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct DraftEmailRequest {
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct DraftEmailResponse {
    pub subject: String,
    pub body: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Courtesy feature with a small daily allowance; past it the client sees
// the same message a provider outage produces.
//

#[post("/api/generate-email-body")]
pub async fn draft_email_handler(
    req: web::Json<DraftEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.draft_email.execute(&req.subject, &req.context).await {
        Ok(draft) => actix_web::HttpResponse::Ok().json(DraftEmailResponse {
            subject: draft.subject,
            body: draft.body,
        }),
        Err(DraftEmailError::QuotaExhausted) => ApiResponse::too_many_requests(
            "AI_UNAVAILABLE",
            "AI support is temporarily not available",
        ),
        Err(DraftEmailError::MissingApiKey) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "API_KEY_MISSING",
            "API Key not set due to limited access",
        ),
        Err(DraftEmailError::ProviderUnavailable) => ApiResponse::service_unavailable(
            "AI_UNAVAILABLE",
            "AI support is temporarily not available",
        ),
        Err(DraftEmailError::Internal(msg)) => {
            error!("Email draft generation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
