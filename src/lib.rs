//! # rxiv-search
//!
//! Interactive search over the preprints posted to bioRxiv or medRxiv in the
//! last few days.
//!
//! ## Architecture
//!
//! - [`models`]: Paper, server and search query types
//! - [`sources`]: Retrieval from the bioRxiv details API behind the [`Source`] trait
//! - [`ui`]: Console prompts, result listing and the selection loop
//! - [`utils`]: HTTP client, term filter and browser launching
//! - [`config`]: Configuration management
//! - [`app`]: The end-to-end interactive pipeline

pub mod app;
pub mod config;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{run, RunOutcome};
pub use models::{Paper, SearchQuery, Server};
pub use sources::{BiorxivSource, Source, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
