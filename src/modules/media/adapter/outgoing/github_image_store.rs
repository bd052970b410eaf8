// src/modules/media/adapter/outgoing/github_image_store.rs

use async_trait::async_trait;
use base64::Engine;
use std::sync::Arc;

use crate::github::application::ports::incoming::use_cases::{PublishError, PublishFileUseCase};
use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError};

/// Commits uploads under `public/images/` in the remote repository; the
/// deploy serves that directory at `/images/`.
#[derive(Clone)]
pub struct GithubImageStore {
    publisher: Arc<dyn PublishFileUseCase + Send + Sync>,
}

impl GithubImageStore {
    pub fn new(publisher: Arc<dyn PublishFileUseCase + Send + Sync>) -> Self {
        Self { publisher }
    }
}

fn map_publish_error(e: PublishError) -> ImageStoreError {
    match e {
        PublishError::MissingToken => ImageStoreError::MissingCredential,
        PublishError::Upstream { status, body } => ImageStoreError::Upstream { status, body },
        PublishError::Transport(msg) => ImageStoreError::Io(msg),
    }
}

#[async_trait]
impl ImageStore for GithubImageStore {
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ImageStoreError> {
        let repo_path = format!("public/images/{}", file_name);
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);

        self.publisher
            .publish_base64(&repo_path, &encoded, "Upload image via admin")
            .await
            .map_err(map_publish_error)?;

        Ok(format!("/images/{}", file_name))
    }
}
