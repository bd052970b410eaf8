// src/modules/github/adapter/outgoing/github_contents_client.rs

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::github::application::config::GithubConfig;
use crate::github::application::ports::outgoing::{RepoClientError, RepoContentsClient};

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("portfolio-actix/", env!("CARGO_PKG_VERSION"));

fn contents_url(api_base: &str, repo: &str, path: &str, branch: Option<&str>) -> String {
    match branch {
        Some(branch) => format!("{}/repos/{}/contents/{}?ref={}", api_base, repo, path, branch),
        None => format!("{}/repos/{}/contents/{}", api_base, repo, path),
    }
}

fn put_body(message: &str, content_base64: &str, branch: &str, sha: Option<&str>) -> Value {
    let mut body = json!({
        "message": message,
        "content": content_base64,
        "branch": branch,
    });
    if let Some(sha) = sha {
        body["sha"] = Value::String(sha.to_string());
    }
    body
}

/// reqwest-backed client for the GitHub contents API.
#[derive(Clone)]
pub struct GithubContentsClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubContentsClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn token(&self) -> Result<&str, RepoClientError> {
        self.config
            .token
            .as_deref()
            .ok_or(RepoClientError::MissingToken)
    }

    async fn error_body(response: reqwest::Response) -> Value {
        // The provider usually answers JSON; anything else is wrapped so
        // the caller still gets a payload to forward.
        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => body,
            Err(_) => json!({"message": format!("provider error ({})", status)}),
        }
    }
}

#[async_trait]
impl RepoContentsClient for GithubContentsClient {
    async fn file_sha(&self, path: &str) -> Result<Option<String>, RepoClientError> {
        let token = self.token()?;
        let url = contents_url(
            &self.config.api_base,
            &self.config.repo,
            path,
            Some(&self.config.branch),
        );

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("token {}", token))
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))?;

        // Any non-success (typically 404 on first write) means "no sha".
        if !response.status().is_success() {
            return Ok(None);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))?;
        Ok(body["sha"].as_str().map(|s| s.to_string()))
    }

    async fn put_file(
        &self,
        path: &str,
        content_base64: &str,
        message: &str,
        sha: Option<String>,
    ) -> Result<Value, RepoClientError> {
        let token = self.token()?;
        let url = contents_url(&self.config.api_base, &self.config.repo, path, None);
        let body = put_body(message, content_base64, &self.config.branch, sha.as_deref());

        let response = self
            .http
            .put(&url)
            .header("Authorization", format!("token {}", token))
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .json(&body)
            .send()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoClientError::Upstream {
                status: status.as_u16(),
                body: Self::error_body(response).await,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))
    }

    async fn repo_metadata(&self, full_name: &str) -> Result<Value, RepoClientError> {
        let token = self.token()?;
        let url = format!("{}/repos/{}", self.config.api_base, full_name);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("token {}", token))
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoClientError::Upstream {
                status: status.as_u16(),
                body: Self::error_body(response).await,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RepoClientError::Transport(e.to_string()))
    }
}
