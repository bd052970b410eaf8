// src/modules/github/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublishError {
    #[error("Provider token is not set")]
    MissingToken,

    #[error("Provider error ({status})")]
    Upstream { status: u16, body: Value },

    #[error("Transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait PublishFileUseCase: Send + Sync {
    /// Commit a JSON document to `file_path`: pretty-print, base64-encode,
    /// fetch the current revision marker, PUT. Returns the provider's
    /// response payload.
    async fn publish_json(
        &self,
        file_path: &str,
        json: &Value,
        commit_message: &str,
    ) -> Result<Value, PublishError>;

    /// Commit already-encoded content (image bytes, PDFs) to `file_path`.
    async fn publish_base64(
        &self,
        file_path: &str,
        content_base64: &str,
        commit_message: &str,
    ) -> Result<Value, PublishError>;
}

//
// ──────────────────────────────────────────────────────────
// Showcase
// ──────────────────────────────────────────────────────────
//

/// One repository card on the showcase panel.
#[derive(Debug, Clone, Serialize)]
pub struct RepoCard {
    pub id: i64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShowcaseError {
    #[error("Provider token is not set")]
    MissingToken,

    #[error("Failed to fetch repos")]
    FetchFailed,
}

#[async_trait]
pub trait ListShowcaseReposUseCase: Send + Sync {
    /// Metadata for the configured repository list; repos that fail to
    /// resolve are dropped rather than failing the whole listing.
    async fn execute(&self) -> Result<Vec<RepoCard>, ShowcaseError>;
}
