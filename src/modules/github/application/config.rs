// src/modules/github/application/config.rs

/// Where commits land. The token is optional at startup: endpoints that
/// need it answer 500 when it is absent rather than refusing to boot.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub repo: String,
    pub branch: String,
    pub api_base: String,
}

impl GithubConfig {
    pub const DEFAULT_BRANCH: &'static str = "main";
    pub const DEFAULT_API_BASE: &'static str = "https://api.github.com";

    pub fn from_env() -> Self {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let repo = std::env::var("GITHUB_REPO").unwrap_or_default();
        let branch = std::env::var("GITHUB_BRANCH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BRANCH.to_string());
        let api_base = std::env::var("GITHUB_API_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_BASE.to_string());

        Self {
            token,
            repo,
            branch,
            api_base,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some() && !self.repo.is_empty()
    }
}

/// The fixed repository list rendered on the showcase panel.
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    pub username: String,
    pub repos: Vec<String>,
}

impl ShowcaseConfig {
    pub fn from_env() -> Self {
        let username = std::env::var("SHOWCASE_USERNAME").unwrap_or_default();
        let repos = std::env::var("SHOWCASE_REPOS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { username, repos }
    }
}
