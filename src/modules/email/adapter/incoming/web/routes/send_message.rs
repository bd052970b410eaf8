// src/modules/email/adapter/incoming/web/routes/send_message.rs

use actix_web::{post, web, Responder};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/send-email")]
pub async fn send_message_handler(
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.from.trim().is_empty() || req.subject.trim().is_empty() || req.body.trim().is_empty() {
        return ApiResponse::bad_request("MISSING_FIELDS", "Missing required fields");
    }
    if !EmailAddress::is_valid(&req.from) {
        return ApiResponse::bad_request("INVALID_SENDER", "Sender address is not valid");
    }

    let Some(relay) = &data.contact_relay else {
        return ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "EMAIL_CONFIG_MISSING",
            "Email configuration missing",
        );
    };

    match relay.relay(&req.from, &req.subject, &req.body).await {
        Ok(()) => actix_web::HttpResponse::Ok().json(SendMessageResponse { success: true }),
        Err(e) => {
            error!("Failed to relay contact message: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SEND_FAILED",
                "Failed to send email",
            )
        }
    }
}
