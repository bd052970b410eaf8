// src/modules/assist/application/services/summarize_profile_service.rs

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::assist::application::ports::incoming::use_cases::{
    SummarizeProfileError, SummarizeProfileUseCase,
};
use crate::assist::application::ports::outgoing::{
    ProfileSource, TextGenerationError, TextGenerator,
};

fn build_prompt(profile: &Value, repos: &[Value]) -> String {
    let repo_list = repos
        .iter()
        .map(|repo| {
            format!(
                "- {}: {}",
                repo["name"].as_str().unwrap_or("unnamed"),
                repo["description"].as_str().unwrap_or("No description")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let name = profile["name"]
        .as_str()
        .or_else(|| profile["login"].as_str())
        .unwrap_or("unknown");

    format!(
        "You are an expert GitHub profile summarizer.\n\
         Given the following GitHub profile and repositories, write a concise, professional 2-line summary of the user's GitHub profile for a portfolio website.\n\n\
         Profile:\n\
         Name: {}\n\
         Bio: {}\n\
         Public Repos: {}\n\
         Followers: {}\n\
         Following: {}\n\n\
         Top Repositories:\n{}\n\n\
         Summary (2 lines):\n",
        name,
        profile["bio"].as_str().unwrap_or("N/A"),
        profile["public_repos"].as_i64().unwrap_or(0),
        profile["followers"].as_i64().unwrap_or(0),
        profile["following"].as_i64().unwrap_or(0),
        repo_list
    )
}

#[derive(Clone)]
pub struct SummarizeProfileService {
    source: Arc<dyn ProfileSource + Send + Sync>,
    generator: Arc<dyn TextGenerator + Send + Sync>,
}

impl SummarizeProfileService {
    pub fn new(source: Arc<dyn ProfileSource + Send + Sync>, generator: Arc<dyn TextGenerator + Send + Sync>) -> Self {
        Self { source, generator }
    }
}

#[async_trait]
impl SummarizeProfileUseCase for SummarizeProfileService {
    async fn execute(&self) -> Result<String, SummarizeProfileError> {
        let (profile, repos) = futures::try_join!(
            self.source.fetch_profile(),
            self.source.fetch_recent_repos()
        )
        .map_err(|e| SummarizeProfileError::Failed(e.to_string()))?;

        let prompt = build_prompt(&profile, &repos);

        match self.generator.generate(&prompt).await {
            Ok(summary) => Ok(summary.trim().to_string()),
            Err(TextGenerationError::MissingApiKey) => Err(SummarizeProfileError::MissingApiKey),
            Err(e) => Err(SummarizeProfileError::Failed(e.to_string())),
        }
    }
}
