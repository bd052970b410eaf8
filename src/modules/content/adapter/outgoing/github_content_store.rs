// src/modules/content/adapter/outgoing/github_content_store.rs

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::content::application::domain::sections::SectionKind;
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError};
use crate::github::application::ports::incoming::use_cases::{PublishError, PublishFileUseCase};

/// Commit-backed store. Reads come from the local store (the deploy serves
/// the committed files); a save commits to the repository first, then
/// writes through locally so the update is visible to reads before the
/// response returns.
#[derive(Clone)]
pub struct GithubContentStore {
    local: Arc<dyn ContentStore + Send + Sync>,
    publisher: Arc<dyn PublishFileUseCase + Send + Sync>,
}

impl GithubContentStore {
    pub fn new(local: Arc<dyn ContentStore + Send + Sync>, publisher: Arc<dyn PublishFileUseCase + Send + Sync>) -> Self {
        Self { local, publisher }
    }
}

fn commit_message(section: SectionKind) -> String {
    format!("Update {} via admin", section.file_name())
}

fn map_publish_error(e: PublishError) -> ContentStoreError {
    match e {
        PublishError::MissingToken => ContentStoreError::MissingCredential,
        PublishError::Upstream { status, body } => ContentStoreError::Upstream { status, body },
        PublishError::Transport(msg) => ContentStoreError::Io(msg),
    }
}

#[async_trait]
impl ContentStore for GithubContentStore {
    async fn load(&self, section: SectionKind) -> Result<Option<Value>, ContentStoreError> {
        self.local.load(section).await
    }

    async fn save(&self, section: SectionKind, document: &Value) -> Result<(), ContentStoreError> {
        self.publisher
            .publish_json(&section.repo_path(), document, &commit_message(section))
            .await
            .map_err(map_publish_error)?;

        self.local.save(section, document).await
    }
}
