// src/modules/assist/application/ports/incoming/use_cases.rs

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DraftEmailError {
    /// The daily attempt limit was reached; try again tomorrow.
    #[error("Daily attempt limit reached")]
    QuotaExhausted,

    #[error("API key is not set")]
    MissingApiKey,

    /// The provider failed; surfaced as "temporarily not available".
    #[error("Provider unavailable")]
    ProviderUnavailable,

    #[error("{0}")]
    Internal(String),
}

#[async_trait]
pub trait DraftEmailUseCase: Send + Sync {
    async fn execute(&self, subject: &str, context: &str) -> Result<EmailDraft, DraftEmailError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SummarizeProfileError {
    #[error("API key is not set")]
    MissingApiKey,

    #[error("{0}")]
    Failed(String),
}

#[async_trait]
pub trait SummarizeProfileUseCase: Send + Sync {
    /// A two-line profile summary for the public site.
    async fn execute(&self) -> Result<String, SummarizeProfileError>;
}
