// src/modules/media/adapter/outgoing/fs_image_store.rs

use async_trait::async_trait;
use std::path::PathBuf;

use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError};

/// Writes uploads into the served images directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    images_dir: PathBuf,
}

impl FsImageStore {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ImageStoreError> {
        std::fs::create_dir_all(&self.images_dir)
            .map_err(|e| ImageStoreError::Io(e.to_string()))?;
        std::fs::write(self.images_dir.join(file_name), bytes)
            .map_err(|e| ImageStoreError::Io(e.to_string()))?;

        Ok(format!("/images/{}", file_name))
    }
}
