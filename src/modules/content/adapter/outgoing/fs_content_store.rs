// src/modules/content/adapter/outgoing/fs_content_store.rs

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::content::application::domain::sections::SectionKind;
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError};

/// One pretty-printed JSON file per section under the data directory.
/// Synchronous fs calls are fine at single-operator scale.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    data_dir: PathBuf,
}

impl FsContentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn document_path(&self, section: SectionKind) -> PathBuf {
        self.data_dir.join(section.file_name())
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn load(&self, section: SectionKind) -> Result<Option<Value>, ContentStoreError> {
        let path = self.document_path(section);
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| ContentStoreError::Io(e.to_string()))?;
        let document = serde_json::from_str(&raw)
            .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;
        Ok(Some(document))
    }

    async fn save(&self, section: SectionKind, document: &Value) -> Result<(), ContentStoreError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| ContentStoreError::Io(e.to_string()))?;

        let pretty = serde_json::to_string_pretty(document)
            .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;
        std::fs::write(self.document_path(section), pretty)
            .map_err(|e| ContentStoreError::Io(e.to_string()))?;
        Ok(())
    }
}
