// src/modules/content/application/ports/outgoing/content_store.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::domain::sections::SectionKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Storage error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The commit-based provider has no credential configured.
    #[error("Commit credential is not configured")]
    MissingCredential,

    /// The provider rejected the update; status and body are forwarded
    /// verbatim to the caller.
    #[error("Provider rejected the update ({status})")]
    Upstream { status: u16, body: Value },
}

/// Whole-document storage for one section: load what is there (None means
/// "use the documented default") and replace it wholesale on save.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn load(&self, section: SectionKind) -> Result<Option<Value>, ContentStoreError>;

    async fn save(&self, section: SectionKind, document: &Value) -> Result<(), ContentStoreError>;
}
