// src/modules/auth/adapter/incoming/web/extractors/admin.rs

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use base64::Engine;
use std::future::{ready, Ready};

use crate::auth::application::credentials::AdminCredentials;
use crate::shared::api::ApiResponse;

/// The authenticated admin operator, proven by HTTP Basic credentials
/// matching the two configured values.
#[derive(Debug, Clone)]
pub struct AdminOperator {
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized("UNAUTHORIZED", "Unauthorized"))
}

fn decode_basic_credentials(req: &HttpRequest) -> Option<(String, String)> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let encoded = header.strip_prefix("Basic ")?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

impl FromRequest for AdminOperator {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let credentials = match req.app_data::<actix_web::web::Data<AdminCredentials>>() {
            Some(credentials) => credentials,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let Some((username, password)) = decode_basic_credentials(req) else {
            return ready(Err(unauthorized()));
        };

        if !credentials.verify(&username, &password) {
            return ready(Err(unauthorized()));
        }

        ready(Ok(AdminOperator { username }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, Responder};

    #[get("/guarded")]
    async fn guarded(admin: AdminOperator) -> impl Responder {
        actix_web::HttpResponse::Ok().json(serde_json::json!({"user": admin.username}))
    }

    fn basic(user: &str, pass: &str) -> String {
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, pass))
        )
    }

    async fn call(header: Option<String>) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AdminCredentials::new("admin", "123")))
                .service(guarded),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/guarded");
        if let Some(header) = header {
            req = req.insert_header(("Authorization", header));
        }
        test::call_service(&app, req.to_request()).await.status()
    }

    #[actix_web::test]
    async fn test_valid_credentials_pass() {
        assert_eq!(call(Some(basic("admin", "123"))).await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_header_is_401() {
        assert_eq!(call(None).await, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_wrong_password_is_401() {
        assert_eq!(
            call(Some(basic("admin", "wrong"))).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_non_basic_scheme_is_401() {
        assert_eq!(
            call(Some("Bearer sometoken".to_string())).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_unparseable_base64_is_401() {
        assert_eq!(
            call(Some("Basic ???not-base64???".to_string())).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
