//! Preprint sources behind a small trait seam.
//!
//! [`Source`] fetches every record posted to a server within a date window.
//! [`fetch_recent`] is the entry point the pipeline uses: it enforces the
//! upstream look-back limit before any request is made, then asks the source
//! for the window ending today.
//!
//! - [`BiorxivSource`] talks to the live details endpoint
//! - [`MockSource`] returns canned records and counts calls, for tests

mod biorxiv;
pub mod mock;

pub use biorxiv::{BiorxivSource, API_URL};
pub use mock::MockSource;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{DateInterval, Paper, SearchQuery, Server, MAX_DAYS_BACK};

/// A repository that can list the preprints posted in a date window.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Fetch every record `server` posted within `interval`, in upstream order.
    ///
    /// Implementations make a single attempt; an empty vector means the
    /// request succeeded but nothing was posted.
    async fn fetch_interval(
        &self,
        server: Server,
        interval: &DateInterval,
    ) -> Result<Vec<Paper>, SourceError>;
}

/// Errors that can occur when retrieving papers
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Request parameters the upstream API cannot serve
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the API
    #[error("Error accessing API: HTTP {status}")]
    Api { status: u16 },

    /// Body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

/// Retrieve the papers `query.server` posted in the last `query.days` days.
///
/// Day bounds beyond [`MAX_DAYS_BACK`] fail before the source is consulted.
pub async fn fetch_recent(
    source: &dyn Source,
    query: &SearchQuery,
    today: NaiveDate,
) -> Result<Vec<Paper>, SourceError> {
    if !query.within_bounds() {
        return Err(SourceError::InvalidRequest(format!(
            "cannot search back this far ({} days requested, at most {} supported)",
            query.days, MAX_DAYS_BACK
        )));
    }

    let interval = query.interval(today);
    tracing::debug!(
        source = source.id(),
        server = query.server.id(),
        %interval,
        "fetching recent papers"
    );

    let papers = source.fetch_interval(query.server, &interval).await?;
    tracing::debug!(count = papers.len(), "retrieved papers");
    Ok(papers)
}
