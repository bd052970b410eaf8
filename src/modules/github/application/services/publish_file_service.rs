// src/modules/github/application/services/publish_file_service.rs

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use std::sync::Arc;

use crate::github::application::ports::incoming::use_cases::{PublishError, PublishFileUseCase};
use crate::github::application::ports::outgoing::{RepoClientError, RepoContentsClient};

/// Fetch-sha-then-PUT against the commit-based provider. The sha satisfies
/// the provider's update precondition; it is not conflict detection.
#[derive(Clone)]
pub struct PublishFileService {
    client: Arc<dyn RepoContentsClient + Send + Sync>,
}

impl PublishFileService {
    pub fn new(client: Arc<dyn RepoContentsClient + Send + Sync>) -> Self {
        Self { client }
    }

    async fn put(
        &self,
        file_path: &str,
        content_base64: &str,
        commit_message: &str,
    ) -> Result<Value, PublishError> {
        let sha = self
            .client
            .file_sha(file_path)
            .await
            .map_err(map_client_error)?;

        self.client
            .put_file(file_path, content_base64, commit_message, sha)
            .await
            .map_err(map_client_error)
    }
}

fn map_client_error(e: RepoClientError) -> PublishError {
    match e {
        RepoClientError::MissingToken => PublishError::MissingToken,
        RepoClientError::Upstream { status, body } => PublishError::Upstream { status, body },
        RepoClientError::Transport(msg) => PublishError::Transport(msg),
    }
}

#[async_trait]
impl PublishFileUseCase for PublishFileService {
    async fn publish_json(
        &self,
        file_path: &str,
        json: &Value,
        commit_message: &str,
    ) -> Result<Value, PublishError> {
        let pretty = serde_json::to_string_pretty(json)
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(pretty);

        self.put(file_path, &encoded, commit_message).await
    }

    async fn publish_base64(
        &self,
        file_path: &str,
        content_base64: &str,
        commit_message: &str,
    ) -> Result<Value, PublishError> {
        self.put(file_path, content_base64, commit_message).await
    }
}
