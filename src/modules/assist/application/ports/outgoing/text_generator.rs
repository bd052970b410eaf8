// src/modules/assist/application/ports/outgoing/text_generator.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TextGenerationError {
    #[error("API key is not set")]
    MissingApiKey,

    /// Any 4xx/5xx from the provider; the admin-facing message is the
    /// generic "temporarily not available".
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One prompt in, the completion text out.
    async fn generate(&self, prompt: &str) -> Result<String, TextGenerationError>;
}
