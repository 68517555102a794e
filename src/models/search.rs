//! Search query and date window models.

use chrono::{Days, NaiveDate};

use super::Server;

/// Furthest the details endpoint is queried back from today, in days
pub const MAX_DAYS_BACK: u32 = 3;

/// Date format used in API paths
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters gathered for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Server to query
    pub server: Server,

    /// How many days back from today to search
    pub days: u32,

    /// Free-text term matched against titles and abstracts
    pub term: String,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(server: Server, days: u32, term: impl Into<String>) -> Self {
        Self {
            server,
            days,
            term: term.into(),
        }
    }

    /// Whether the day bound is within what the upstream API serves
    pub fn within_bounds(&self) -> bool {
        self.days <= MAX_DAYS_BACK
    }

    /// Date window ending on `today`
    pub fn interval(&self, today: NaiveDate) -> DateInterval {
        DateInterval::ending(today, self.days)
    }
}

/// Inclusive date window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    /// Window covering `days` days back from `end`
    pub fn ending(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// `YYYY-MM-DD` rendering of the start date
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `YYYY-MM-DD` rendering of the end date
    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for DateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start_str(), self.end_str())
    }
}
