//! Paper model representing a single bioRxiv/medRxiv preprint.

use std::str::FromStr;

/// Preprint servers reachable through the bioRxiv details API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Server {
    BioRxiv,
    MedRxiv,
}

/// Every server accepted at the prompt, in display order
pub const VALID_SERVERS: [Server; 2] = [Server::BioRxiv, Server::MedRxiv];

impl Server {
    /// Returns the server identifier used in API paths
    pub fn id(&self) -> &'static str {
        match self {
            Server::BioRxiv => "biorxiv",
            Server::MedRxiv => "medrxiv",
        }
    }

    /// Returns the display name of the server
    pub fn name(&self) -> &'static str {
        match self {
            Server::BioRxiv => "bioRxiv",
            Server::MedRxiv => "medRxiv",
        }
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string names no known server
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown server '{0}' (expected one of: biorxiv, medrxiv)")]
pub struct UnknownServer(pub String);

impl FromStr for Server {
    type Err = UnknownServer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        VALID_SERVERS
            .into_iter()
            .find(|server| server.id() == wanted)
            .ok_or_else(|| UnknownServer(s.trim().to_string()))
    }
}

/// A preprint as returned by the details endpoint
///
/// Records are never mutated after retrieval; filtering produces new vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    /// Digital Object Identifier, e.g. `10.1101/2024.01.01.123456`
    pub doi: String,

    /// Paper title
    pub title: String,

    /// Authors as supplied upstream ("Lastname Firstname, Lastname Firstname")
    pub authors: String,

    /// Abstract text (empty when the API omits it)
    pub r#abstract: String,

    /// Posting date as supplied upstream, not validated
    pub date: String,

    /// Server the record was retrieved from
    pub server: Server,

    /// Subject category
    pub category: Option<String>,

    /// Preprint version number
    pub version: Option<String>,
}

impl Paper {
    /// Create a new paper with required fields
    pub fn new(doi: String, title: String, server: Server) -> Self {
        Self {
            doi,
            title,
            authors: String::new(),
            r#abstract: String::new(),
            date: String::new(),
            server,
            category: None,
            version: None,
        }
    }

    /// Surname of the first listed author
    ///
    /// Takes the first comma-separated entry and returns its last whitespace-separated
    /// token. Returns an empty string when no authors are listed.
    pub fn first_author_surname(&self) -> &str {
        self.authors
            .split(',')
            .next()
            .and_then(|first| first.split_whitespace().last())
            .unwrap_or("")
    }

    /// Canonical resolver URL for this paper
    pub fn doi_url(&self) -> String {
        format!("https://doi.org/{}", self.doi)
    }

    /// Whether the lower-cased needle occurs in the title or abstract
    pub fn mentions(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.r#abstract.to_lowercase().contains(needle_lower)
    }
}

/// Builder for constructing Paper objects
#[derive(Debug, Clone)]
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    /// Create a new builder with required fields
    pub fn new(doi: impl Into<String>, title: impl Into<String>, server: Server) -> Self {
        Self {
            paper: Paper::new(doi.into(), title.into(), server),
        }
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.paper.authors = authors.into();
        self
    }

    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.paper.r#abstract = abstract_text.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.paper.date = date.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.paper.category = Some(category.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.paper.version = Some(version.into());
        self
    }

    /// Build the Paper
    pub fn build(self) -> Paper {
        self.paper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_from_str() {
        assert_eq!("biorxiv".parse::<Server>(), Ok(Server::BioRxiv));
        assert_eq!(" MedRxiv \n".parse::<Server>(), Ok(Server::MedRxiv));
        assert_eq!(
            "arxiv".parse::<Server>(),
            Err(UnknownServer("arxiv".to_string()))
        );
        assert!("".parse::<Server>().is_err());
    }

    #[test]
    fn test_paper_builder() {
        let paper = PaperBuilder::new("10.1101/2024.01.01.000001", "Test Paper", Server::BioRxiv)
            .authors("Doe John, Smith Jane")
            .abstract_text("This is a test abstract.")
            .date("2024-01-01")
            .category("cancer biology")
            .build();

        assert_eq!(paper.doi, "10.1101/2024.01.01.000001");
        assert_eq!(paper.title, "Test Paper");
        assert_eq!(paper.date, "2024-01-01");
        assert_eq!(paper.category.as_deref(), Some("cancer biology"));
        assert_eq!(paper.version, None);
    }

    #[test]
    fn test_first_author_surname() {
        let paper = PaperBuilder::new("1", "T", Server::BioRxiv)
            .authors("Jane Q Smith, Bob Jones")
            .build();
        assert_eq!(paper.first_author_surname(), "Smith");

        let single = PaperBuilder::new("1", "T", Server::BioRxiv)
            .authors("Curie")
            .build();
        assert_eq!(single.first_author_surname(), "Curie");

        let none = Paper::new("1".to_string(), "T".to_string(), Server::MedRxiv);
        assert_eq!(none.first_author_surname(), "");
    }

    #[test]
    fn test_doi_url() {
        let paper = Paper::new(
            "10.1101/2024.02.03.578901".to_string(),
            "T".to_string(),
            Server::MedRxiv,
        );
        assert_eq!(paper.doi_url(), "https://doi.org/10.1101/2024.02.03.578901");
    }

    #[test]
    fn test_mentions_is_title_or_abstract_only() {
        let paper = PaperBuilder::new("1", "Tumour Growth", Server::BioRxiv)
            .authors("Cancer Ann")
            .abstract_text("We study CANCER cells.")
            .build();

        assert!(paper.mentions("tumour"));
        assert!(paper.mentions("cancer cells"));
        assert!(!paper.mentions("ann"));
    }
}
