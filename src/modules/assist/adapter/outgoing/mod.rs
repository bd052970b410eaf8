pub mod gemini_text_generator;
pub mod github_profile_source;

pub use gemini_text_generator::{GeminiConfig, GeminiTextGenerator};
pub use github_profile_source::GithubProfileSource;
