pub mod profile_source;
pub mod text_generator;

pub use profile_source::{ProfileSource, ProfileSourceError};
pub use text_generator::{TextGenerationError, TextGenerator};
