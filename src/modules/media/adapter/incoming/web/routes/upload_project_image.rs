// src/modules/media/adapter/incoming/web/routes/upload_project_image.rs

use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::error;

use crate::media::adapter::incoming::web::multipart::read_upload_form;
use crate::media::application::filenames::slugged_image_name;
use crate::media::application::ports::outgoing::ImageStoreError;
use crate::shared::api::{upstream_passthrough, ApiResponse};
use crate::AppState;

use super::upload_blog_image::UploadImageResponse;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
// Project images are committed to the repository; the response still
// carries the served path.
//

#[post("/api/projects/image")]
pub async fn upload_project_image_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_upload_form(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::bad_request("INVALID_BODY", &e.to_string()),
    };

    let title = form.text("title").unwrap_or("project").to_string();
    let Some(file) = form.file else {
        return ApiResponse::bad_request("NO_IMAGE_FILE", "No image file provided");
    };
    let file_name = slugged_image_name(&title, &file.file_name);

    match data.project_image_store.store(&file_name, file.bytes).await {
        Ok(image) => actix_web::HttpResponse::Ok().json(UploadImageResponse { image }),
        Err(ImageStoreError::Upstream { status, body }) => upstream_passthrough(status, body),
        Err(ImageStoreError::MissingCredential) => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "GITHUB_TOKEN_MISSING",
            "GitHub token not set",
        ),
        Err(ImageStoreError::Io(msg)) => {
            error!("Failed to store project image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::multipart_body;
    use crate::tests::support::stubs::StubImageStore;

    #[actix_web::test]
    async fn test_upload_goes_through_the_commit_backed_store() {
        let store = StubImageStore::recording();
        let app_state = TestAppStateBuilder::default()
            .with_project_image_store(store.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(upload_project_image_handler),
        )
        .await;

        let (content_type, body) = multipart_body(
            &[("title", "Site Redesign")],
            Some(("image", "shot.webp", b"webp bytes")),
        );
        let req = test::TestRequest::post()
            .uri("/api/projects/image")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["image"], "/images/site_redesign.webp");
    }

    #[actix_web::test]
    async fn test_missing_token_surfaces_as_500() {
        let app_state = TestAppStateBuilder::default()
            .with_project_image_store(StubImageStore::failing(
                ImageStoreError::MissingCredential,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(upload_project_image_handler),
        )
        .await;

        let (content_type, body) = multipart_body(&[], Some(("image", "x.png", b"png")));
        let req = test::TestRequest::post()
            .uri("/api/projects/image")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "GITHUB_TOKEN_MISSING");
    }

    #[actix_web::test]
    async fn test_provider_rejection_passes_through() {
        let app_state = TestAppStateBuilder::default()
            .with_project_image_store(StubImageStore::failing(ImageStoreError::Upstream {
                status: 422,
                body: json!({"message": "too large"}),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(upload_project_image_handler),
        )
        .await;

        let (content_type, body) = multipart_body(&[], Some(("image", "x.png", b"png")));
        let req = test::TestRequest::post()
            .uri("/api/projects/image")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "too large");
    }
}
