//! Utility modules supporting the search pipeline.
//!
//! - [`HttpClient`]: HTTP client with the crate's user agent and timeouts
//! - [`filter_papers`]: Case-insensitive term matching over titles and abstracts
//! - [`BrowserLauncher`]: Seam for opening URLs, with [`SystemBrowser`] for real use
//!   and [`RecordingBrowser`] for tests

mod browser;
mod filter;
mod http;

pub use browser::{BrowserError, BrowserLauncher, RecordingBrowser, SystemBrowser};
pub use filter::filter_papers;
pub use http::{HttpClient, DEFAULT_TIMEOUT_SECS};
