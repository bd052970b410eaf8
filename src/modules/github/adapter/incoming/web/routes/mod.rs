mod showcase_repos;
mod update_file;
mod upload_file;

pub use showcase_repos::showcase_repos_handler;
pub use update_file::update_file_handler;
pub use upload_file::upload_file_handler;
