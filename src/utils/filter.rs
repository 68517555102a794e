//! Case-insensitive term matching over retrieved papers.

use crate::models::Paper;

/// Keep the papers whose title or abstract contains `term`, ignoring case.
///
/// The input order is preserved and the input is left untouched. An empty term
/// matches every paper.
///
/// # Examples
///
/// ```
/// use rxiv_search::models::{PaperBuilder, Server};
/// use rxiv_search::utils::filter_papers;
///
/// let papers = vec![
///     PaperBuilder::new("1", "Cancer genomics", Server::BioRxiv).build(),
///     PaperBuilder::new("2", "Plant roots", Server::BioRxiv).build(),
/// ];
/// let hits = filter_papers(&papers, "CANCER");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].doi, "1");
/// ```
pub fn filter_papers(papers: &[Paper], term: &str) -> Vec<Paper> {
    let needle = term.to_lowercase();
    papers
        .iter()
        .filter(|paper| paper.mentions(&needle))
        .cloned()
        .collect()
}
