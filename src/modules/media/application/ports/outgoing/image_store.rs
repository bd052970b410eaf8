// src/modules/media/application/ports/outgoing/image_store.rs

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Storage error: {0}")]
    Io(String),

    #[error("Commit credential is not configured")]
    MissingCredential,

    #[error("Provider rejected the upload ({status})")]
    Upstream { status: u16, body: Value },
}

/// Persists an uploaded image under the site's public images directory
/// (locally or as a repository commit) and returns the public path the
/// content documents reference, e.g. `/images/<name>`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ImageStoreError>;
}
