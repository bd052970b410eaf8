// src/modules/content/application/services/save_section_service.rs

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::content::application::domain::draft::clean_blog_rows;
use crate::content::application::domain::sections::{
    normalize_document, BlogPost, SectionKind, WritePolicy,
};
use crate::content::application::ports::incoming::use_cases::{
    SaveSectionError, SaveSectionUseCase,
};
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError};

/// Routes a whole-document save to the store the section's policy names:
/// the local store for direct sections, the commit-backed store otherwise.
#[derive(Clone)]
pub struct SaveSectionService {
    direct_store: Arc<dyn ContentStore + Send + Sync>,
    commit_store: Arc<dyn ContentStore + Send + Sync>,
}

impl SaveSectionService {
    pub fn new(direct_store: Arc<dyn ContentStore + Send + Sync>, commit_store: Arc<dyn ContentStore + Send + Sync>) -> Self {
        Self {
            direct_store,
            commit_store,
        }
    }
}

fn map_store_error(e: ContentStoreError) -> SaveSectionError {
    match e {
        ContentStoreError::MissingCredential => SaveSectionError::MissingCredential,
        ContentStoreError::Upstream { status, body } => {
            SaveSectionError::Upstream { status, body }
        }
        other => SaveSectionError::StorageError(other.to_string()),
    }
}

#[async_trait]
impl SaveSectionUseCase for SaveSectionService {
    async fn execute(
        &self,
        section: SectionKind,
        document: Value,
    ) -> Result<Value, SaveSectionError> {
        let store = match section.write_policy() {
            WritePolicy::Rejected => {
                return Err(SaveSectionError::DirectWriteNotSupported(section))
            }
            WritePolicy::ReadOnly => return Err(SaveSectionError::ReadOnlySection(section)),
            WritePolicy::Direct => &self.direct_store,
            WritePolicy::Commit => &self.commit_store,
        };

        let mut normalized = normalize_document(section, document)
            .map_err(|e| SaveSectionError::MalformedDocument(e.to_string()))?;

        // A wholesale blogs save keeps only the persisted row fields:
        // merge-path ids and image paths outside /images/ do not survive.
        if section == SectionKind::Blogs {
            let rows: Vec<BlogPost> = serde_json::from_value(normalized)
                .map_err(|e| SaveSectionError::MalformedDocument(e.to_string()))?;
            normalized = serde_json::to_value(clean_blog_rows(&rows))
                .map_err(|e| SaveSectionError::MalformedDocument(e.to_string()))?;
        }

        store
            .save(section, &normalized)
            .await
            .map_err(map_store_error)?;

        Ok(normalized)
    }
}
