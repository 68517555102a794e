//! Core data models for preprints and search parameters.

mod paper;
mod search;

pub use paper::{Paper, PaperBuilder, Server, UnknownServer, VALID_SERVERS};
pub use search::{DateInterval, SearchQuery, DATE_FORMAT, MAX_DAYS_BACK};
