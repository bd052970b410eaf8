// src/modules/content/application/services/merge_blog_entry_service.rs

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::content::application::domain::sections::{BlogPost, SectionKind};
use crate::content::application::ports::incoming::use_cases::{
    IncomingImage, MergeBlogEntryUseCase, SaveSectionError,
};
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError};
use crate::media::application::filenames::generated_blog_image_name;
use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError};

/// The blogs array-merge write path: store the image, stamp the row, merge
/// it into the stored array, persist the whole array through the commit
/// store.
#[derive(Clone)]
pub struct MergeBlogEntryService {
    store: Arc<dyn ContentStore + Send + Sync>,
    images: Arc<dyn ImageStore + Send + Sync>,
}

impl MergeBlogEntryService {
    pub fn new(store: Arc<dyn ContentStore + Send + Sync>, images: Arc<dyn ImageStore + Send + Sync>) -> Self {
        Self { store, images }
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

fn map_image_error(e: ImageStoreError) -> SaveSectionError {
    match e {
        ImageStoreError::MissingCredential => SaveSectionError::MissingCredential,
        ImageStoreError::Upstream { status, body } => {
            SaveSectionError::Upstream { status, body }
        }
        ImageStoreError::Io(msg) => SaveSectionError::StorageError(msg),
    }
}

#[async_trait]
impl MergeBlogEntryUseCase for MergeBlogEntryService {
    async fn execute(
        &self,
        mut entry: BlogPost,
        image: Option<IncomingImage>,
    ) -> Result<BlogPost, SaveSectionError> {
        if let Some(image) = image {
            let name =
                generated_blog_image_name(&image.file_name, Utc::now().timestamp_millis());
            entry.image = self
                .images
                .store(&name, image.bytes)
                .await
                .map_err(map_image_error)?;
        }

        let mut rows: Vec<BlogPost> = match self
            .store
            .load(SectionKind::Blogs)
            .await
            .map_err(map_store_error)?
        {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| SaveSectionError::MalformedDocument(e.to_string()))?,
            None => Vec::new(),
        };

        match entry.id {
            Some(id) if rows.iter().any(|row| row.id == Some(id)) => {
                for row in rows.iter_mut() {
                    if row.id == Some(id) {
                        *row = entry.clone();
                    }
                }
            }
            Some(_) => rows.push(entry.clone()),
            None => {
                entry.id = Some(Utc::now().timestamp_millis());
                rows.push(entry.clone());
            }
        }

        let document = serde_json::to_value(&rows)
            .map_err(|e| SaveSectionError::MalformedDocument(e.to_string()))?;
        self.store
            .save(SectionKind::Blogs, &document)
            .await
            .map_err(map_store_error)?;

        Ok(entry)
    }
}
