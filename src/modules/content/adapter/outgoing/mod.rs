pub mod fs_content_store;
pub mod github_content_store;

pub use fs_content_store::FsContentStore;
pub use github_content_store::GithubContentStore;
