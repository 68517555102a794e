//! bioRxiv/medRxiv details endpoint.
//!
//! Both servers are served by the same API with just a different server
//! segment in the path: `{API_URL}/{server}/{start}/{end}`. One call returns
//! at most one page of records; the page is used as is.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::{DateInterval, Paper, PaperBuilder, Server};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// Base URL of the details endpoint
pub const API_URL: &str = "https://api.biorxiv.org/details";

/// Source backed by the public bioRxiv details API
#[derive(Debug, Clone)]
pub struct BiorxivSource {
    client: HttpClient,
    base_url: String,
}

impl BiorxivSource {
    /// Source pointed at the public API
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, API_URL)
    }

    /// Source pointed at another deployment of the same API
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Full request URL for a server and window
    pub fn request_url(&self, server: Server, interval: &DateInterval) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            server.id(),
            interval.start_str(),
            interval.end_str()
        )
    }

    fn to_papers(server: Server, response: ApiResponse) -> Vec<Paper> {
        response
            .collection
            .into_iter()
            .map(|article| {
                let mut builder = PaperBuilder::new(article.doi, article.title, server)
                    .authors(article.authors)
                    .abstract_text(article.r#abstract.unwrap_or_default())
                    .date(article.date);
                if let Some(category) = article.category.filter(|c| !c.is_empty()) {
                    builder = builder.category(category);
                }
                if let Some(version) = article.version.as_ref().and_then(value_as_string) {
                    builder = builder.version(version);
                }
                builder.build()
            })
            .collect()
    }
}

#[async_trait]
impl Source for BiorxivSource {
    fn id(&self) -> &str {
        "biorxiv-details"
    }

    async fn fetch_interval(
        &self,
        server: Server,
        interval: &DateInterval,
    ) -> Result<Vec<Paper>, SourceError> {
        let url = self.request_url(server, interval);
        tracing::debug!(%url, "requesting {}", server.name());

        let response = self.client.get_json(&url).send().await.map_err(|e| {
            SourceError::Network(format!("Failed to fetch from {}: {}", server.name(), e))
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SourceError::Api {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;
        let json: ApiResponse = serde_json::from_slice(&body)?;

        if let Some(message) = json.messages.first() {
            let total = message.total.as_ref().and_then(value_as_u64);
            tracing::debug!(status = ?message.status, ?total, "{} API status", server.name());
            if let Some(total) = total {
                if total > json.collection.len() as u64 {
                    tracing::warn!(
                        total,
                        returned = json.collection.len(),
                        "only the first page of results is searched"
                    );
                }
            }
        }

        Ok(Self::to_papers(server, json))
    }
}

/// The API reports some numbers as JSON strings and others as numbers.
fn value_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

/// API response structure for the details endpoint
#[derive(Debug, Deserialize)]
struct ApiResponse {
    collection: Vec<Article>,
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct Article {
    doi: String,
    title: String,
    #[serde(default)]
    authors: String,
    #[serde(rename = "abstract", default)]
    r#abstract: Option<String>,
    #[serde(default)]
    date: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    version: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    total: Option<serde_json::Value>,
}
