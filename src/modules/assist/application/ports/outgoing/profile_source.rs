// src/modules/assist/application/ports/outgoing/profile_source.rs

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileSourceError {
    #[error("Failed to fetch GitHub profile")]
    ProfileUnavailable,

    #[error("Failed to fetch GitHub repos")]
    ReposUnavailable,
}

/// Public profile data for the summary feature. Reads are unauthenticated.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<Value, ProfileSourceError>;

    /// Most recently updated repositories, metadata only.
    async fn fetch_recent_repos(&self) -> Result<Vec<Value>, ProfileSourceError>;
}
