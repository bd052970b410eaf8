pub mod github_contents_client;

pub use github_contents_client::GithubContentsClient;
