// src/modules/content/application/services/fetch_section_service.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::content::application::domain::sections::SectionKind;
use crate::content::application::ports::incoming::use_cases::{
    FetchSectionError, FetchSectionUseCase,
};
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError};

#[derive(Clone)]
pub struct FetchSectionService {
    store: Arc<dyn ContentStore + Send + Sync>,
}

impl FetchSectionService {
    pub fn new(store: Arc<dyn ContentStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FetchSectionUseCase for FetchSectionService {
    async fn execute(&self, section: SectionKind) -> Result<serde_json::Value, FetchSectionError> {
        match self.store.load(section).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Ok(section.default_document()),
            // An unreadable entry degrades to the default too; the display
            // layer renders an empty state, never an error page.
            Err(ContentStoreError::Serialization(e)) => {
                tracing::warn!("Ignoring corrupt {} document: {}", section, e);
                Ok(section.default_document())
            }
            Err(e) => Err(FetchSectionError::StorageError(e.to_string())),
        }
    }
}
