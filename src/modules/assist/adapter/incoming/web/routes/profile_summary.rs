// src/modules/assist/adapter/incoming/web/routes/profile_summary.rs

use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::assist::application::ports::incoming::use_cases::SummarizeProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileSummaryResponse {
    pub summary: String,
}

#[get("/api/github-summary")]
pub async fn profile_summary_handler(data: web::Data<AppState>) -> impl Responder {
    match data.summarize_profile.execute().await {
        Ok(summary) => {
            actix_web::HttpResponse::Ok().json(ProfileSummaryResponse { summary })
        }
        Err(SummarizeProfileError::MissingApiKey) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "API_KEY_MISSING",
            "No Gemini API key configured. Set GEMINI_API_KEY in your environment.",
        ),
        Err(SummarizeProfileError::Failed(msg)) => {
            error!("Profile summary failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSummarizeProfileUseCase;

    #[actix_web::test]
    async fn test_the_summary_is_wrapped_in_its_field() {
        let app_state = TestAppStateBuilder::default()
            .with_summarize_profile(StubSummarizeProfileUseCase::summary(
                "Two lines.\nAbout the profile.",
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(profile_summary_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/github-summary")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["summary"], "Two lines.\nAbout the profile.");
    }

    #[actix_web::test]
    async fn test_a_missing_key_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_summarize_profile(StubSummarizeProfileUseCase::failing(
                SummarizeProfileError::MissingApiKey,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(profile_summary_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/github-summary")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
