// src/modules/github/application/ports/outgoing/repo_client.rs

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RepoClientError {
    /// No credential configured; the caller surfaces this as a 500.
    #[error("Provider token is not set")]
    MissingToken,

    /// The provider answered with an error; status and body are kept
    /// verbatim so the caller can forward them.
    #[error("Provider error ({status})")]
    Upstream { status: u16, body: Value },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Commit-based file storage: files are updated by supplying the current
/// revision marker (sha) of the path being replaced.
#[async_trait]
pub trait RepoContentsClient: Send + Sync {
    /// The current sha of `path` on the configured branch; None when the
    /// file does not exist yet (first write creates it).
    async fn file_sha(&self, path: &str) -> Result<Option<String>, RepoClientError>;

    /// PUT base64 content to `path` with a commit message. Returns the
    /// provider's response payload.
    async fn put_file(
        &self,
        path: &str,
        content_base64: &str,
        message: &str,
        sha: Option<String>,
    ) -> Result<Value, RepoClientError>;

    /// Metadata for `owner/name`, used by the showcase panel.
    async fn repo_metadata(&self, full_name: &str) -> Result<Value, RepoClientError>;
}
