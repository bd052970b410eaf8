// src/modules/github/application/services/showcase_service.rs

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

use crate::github::application::config::ShowcaseConfig;
use crate::github::application::ports::incoming::use_cases::{
    ListShowcaseReposUseCase, RepoCard, ShowcaseError,
};
use crate::github::application::ports::outgoing::{RepoClientError, RepoContentsClient};

#[derive(Clone)]
pub struct ShowcaseService {
    client: Arc<dyn RepoContentsClient + Send + Sync>,
    config: ShowcaseConfig,
}

impl ShowcaseService {
    pub fn new(client: Arc<dyn RepoContentsClient + Send + Sync>, config: ShowcaseConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ListShowcaseReposUseCase for ShowcaseService {
    async fn execute(&self) -> Result<Vec<RepoCard>, ShowcaseError> {
        let fetches = self.config.repos.iter().map(|name| {
            let full_name = format!("{}/{}", self.config.username, name);
            let client = Arc::clone(&self.client);
            async move { client.repo_metadata(&full_name).await }
        });

        let mut cards = Vec::new();
        for result in join_all(fetches).await {
            match result {
                Ok(meta) => {
                    // A repo answering with an unexpected shape is dropped
                    // like a failed fetch.
                    let (Some(id), Some(name), Some(html_url)) = (
                        meta["id"].as_i64(),
                        meta["name"].as_str(),
                        meta["html_url"].as_str(),
                    ) else {
                        continue;
                    };
                    cards.push(RepoCard {
                        id,
                        name: name.to_string(),
                        html_url: html_url.to_string(),
                        description: meta["description"].as_str().map(|s| s.to_string()),
                    });
                }
                Err(RepoClientError::MissingToken) => return Err(ShowcaseError::MissingToken),
                Err(_) => continue,
            }
        }

        Ok(cards)
    }
}
