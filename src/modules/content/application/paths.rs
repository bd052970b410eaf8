// src/modules/content/application/paths.rs

use std::path::PathBuf;

/// Where the flat JSON documents and uploaded images live on disk.
#[derive(Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl ContentPaths {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_IMAGES_DIR: &'static str = "public/images";

    /// Load from `DATA_DIR` / `IMAGES_DIR`, falling back to the repository
    /// layout the deploy serves from.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string());
        let images_dir = std::env::var("IMAGES_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_IMAGES_DIR.to_string());

        Self {
            data_dir: PathBuf::from(data_dir),
            images_dir: PathBuf::from(images_dir),
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(data_dir: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            images_dir: images_dir.into(),
        }
    }
}
