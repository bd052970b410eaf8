pub mod fs_image_store;
pub mod github_image_store;

pub use fs_image_store::FsImageStore;
pub use github_image_store::GithubImageStore;
