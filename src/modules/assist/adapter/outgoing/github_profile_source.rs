// src/modules/assist/adapter/outgoing/github_profile_source.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::assist::application::ports::outgoing::{ProfileSource, ProfileSourceError};

const USER_AGENT: &str = concat!("portfolio-actix/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated reads of the public profile endpoints.
#[derive(Clone)]
pub struct GithubProfileSource {
    http: reqwest::Client,
    username: String,
    api_base: String,
}

impl GithubProfileSource {
    pub fn new(username: &str, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            username: username.to_string(),
            api_base: api_base.to_string(),
        }
    }

    async fn get_json(&self, url: &str) -> Option<Value> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json().await.ok()
    }
}

#[async_trait]
impl ProfileSource for GithubProfileSource {
    async fn fetch_profile(&self) -> Result<Value, ProfileSourceError> {
        let url = format!("{}/users/{}", self.api_base, self.username);
        self.get_json(&url)
            .await
            .ok_or(ProfileSourceError::ProfileUnavailable)
    }

    async fn fetch_recent_repos(&self) -> Result<Vec<Value>, ProfileSourceError> {
        let url = format!(
            "{}/users/{}/repos?per_page=6&sort=updated",
            self.api_base, self.username
        );
        let body = self
            .get_json(&url)
            .await
            .ok_or(ProfileSourceError::ReposUnavailable)?;

        match body {
            Value::Array(repos) => Ok(repos),
            _ => Err(ProfileSourceError::ReposUnavailable),
        }
    }
}
