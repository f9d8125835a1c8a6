// file: src/search/youtube.rs
// description: youtube results-page lookup returning the first video link
// reference: https://docs.rs/reqwest

use crate::config::SearchConfig;
use crate::error::{PipelineError, Result};
use crate::extractor::patterns::{YT_INITIAL_DATA, is_plausible_video_id};
use crate::models::SearchOutcome;
use crate::search::SearchProvider;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Search filter restricting results to videos.
const VIDEOS_ONLY_FILTER: &str = "EgIQAQ==";

pub struct YouTubeSearchClient {
    client: Client,
    config: SearchConfig,
}

impl YouTubeSearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PipelineError::Search(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn search_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.config.base_url,
            &[
                ("search_query", query),
                ("sp", VIDEOS_ONLY_FILTER),
                ("hl", self.config.language.as_str()),
                ("gl", self.config.region.as_str()),
            ],
        )
        .map_err(|e| PipelineError::Search(format!("Invalid search URL: {}", e)))
    }

    async fn fetch_results_page(&self, query: &str) -> Result<String> {
        let url = self.search_url(query)?;
        debug!("Requesting search results: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, self.config.language.as_str())
            .send()
            .await
            .map_err(|e| PipelineError::Search(format!("Failed to send search request: {}", e)))?;

        if !response.status().is_success() {
            return Err(PipelineError::Search(format!(
                "Search request failed with status {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| PipelineError::Search(format!("Failed to read search response: {}", e)))
    }

    async fn lookup(&self, query: &str) -> Result<Option<String>> {
        let page = self.fetch_results_page(query).await?;
        let video_id = first_video_id(&page)?;
        Ok(video_id.map(|id| watch_url(&id)))
    }
}

#[async_trait]
impl SearchProvider for YouTubeSearchClient {
    async fn first_video_url(&self, query: &str) -> SearchOutcome {
        match self.lookup(query).await {
            Ok(Some(url)) => SearchOutcome::Found(url),
            Ok(None) => SearchOutcome::NotFound,
            Err(e) => {
                error!("An error occurred while searching YouTube: {}", e);
                SearchOutcome::Error(e.to_string())
            }
        }
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Identifier of the first video result embedded in a results page.
pub fn first_video_id(page: &str) -> Result<Option<String>> {
    let captures = YT_INITIAL_DATA.captures(page).ok_or_else(|| {
        PipelineError::Search("Results page does not contain ytInitialData".to_string())
    })?;

    let data: Value = serde_json::from_str(&captures[1])
        .map_err(|e| PipelineError::Search(format!("Malformed ytInitialData: {}", e)))?;

    Ok(find_video_renderer_id(&data).map(str::to_string))
}

fn find_video_renderer_id(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => map.iter().find_map(|(key, child)| {
            if key == "videoRenderer" {
                let id = child.get("videoId").and_then(Value::as_str);
                if let Some(id) = id.filter(|id| is_plausible_video_id(id)) {
                    return Some(id);
                }
            }
            find_video_renderer_id(child)
        }),
        Value::Array(items) => items.iter().find_map(find_video_renderer_id),
        _ => None,
    }
}
