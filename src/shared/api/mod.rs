pub mod json_config;
pub mod response;

pub use response::{upstream_passthrough, ApiError, ApiResponse};
