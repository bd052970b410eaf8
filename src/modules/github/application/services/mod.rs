pub mod publish_file_service;
pub mod showcase_service;

pub use publish_file_service::PublishFileService;
pub use showcase_service::ShowcaseService;
