// src/modules/content/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::domain::sections::{BlogPost, SectionKind};

//
// ──────────────────────────────────────────────────────────
// Fetch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSectionError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait FetchSectionUseCase: Send + Sync {
    /// Returns the stored document, or the section's documented default
    /// when the store has no entry. A missing document is never an error.
    async fn execute(&self, section: SectionKind) -> Result<Value, FetchSectionError>;
}

//
// ──────────────────────────────────────────────────────────
// Save
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveSectionError {
    /// Direct writes are not supported for this section; the generic
    /// commit endpoint must be used.
    #[error("Direct writes are not supported for {0}")]
    DirectWriteNotSupported(SectionKind),

    #[error("Section {0} is read-only")]
    ReadOnlySection(SectionKind),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Commit credential is not configured")]
    MissingCredential,

    #[error("Provider rejected the update ({status})")]
    Upstream { status: u16, body: Value },

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait SaveSectionUseCase: Send + Sync {
    /// Replace the section's document wholesale, routing the write per the
    /// section's policy. Returns the normalized document as persisted.
    async fn execute(&self, section: SectionKind, document: Value)
        -> Result<Value, SaveSectionError>;
}

//
// ──────────────────────────────────────────────────────────
// Blogs array-merge write path
// ──────────────────────────────────────────────────────────
//

/// An image file received alongside a blog row.
#[derive(Debug, Clone)]
pub struct IncomingImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait MergeBlogEntryUseCase: Send + Sync {
    /// Store the image (when present), write its public path into the row,
    /// then merge the row into the blogs array: an id matches an existing
    /// row to replace, otherwise a timestamp id is assigned and the row is
    /// appended. The merged array is persisted through the section's
    /// commit path; the stored row is returned.
    async fn execute(
        &self,
        entry: BlogPost,
        image: Option<IncomingImage>,
    ) -> Result<BlogPost, SaveSectionError>;
}
