//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{DateInterval, Paper, Server};
use crate::sources::{Source, SourceError};

#[derive(Debug, Default)]
struct MockState {
    papers: Vec<Paper>,
    error: Option<fn() -> SourceError>,
    requests: Vec<(Server, DateInterval)>,
}

/// A mock source for testing that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockSource {
    state: Mutex<MockState>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the papers to return.
    pub fn set_papers(&self, papers: Vec<Paper>) {
        self.state().papers = papers;
    }

    /// Make every fetch fail with the error built by `make_error`.
    pub fn set_error(&self, make_error: fn() -> SourceError) {
        self.state().error = Some(make_error);
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.state().requests.len()
    }

    /// Arguments of the most recent fetch.
    pub fn last_request(&self) -> Option<(Server, DateInterval)> {
        self.state().requests.last().copied()
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    async fn fetch_interval(
        &self,
        server: Server,
        interval: &DateInterval,
    ) -> Result<Vec<Paper>, SourceError> {
        let mut state = self.state();
        state.requests.push((server, *interval));
        match state.error {
            Some(make_error) => Err(make_error()),
            None => Ok(state.papers.clone()),
        }
    }
}

/// Helper function to create a mock bioRxiv paper for testing.
pub fn make_paper(doi: &str, title: &str) -> Paper {
    Paper::new(doi.to_string(), title.to_string(), Server::BioRxiv)
}
