//! Numbered listing of matched papers.

use std::io::{self, BufRead, Write};

use super::Console;
use crate::models::Paper;

/// One result line: `{index}. {surname}. {title}. {date}. doi:{doi}`
pub fn format_result_line(index: usize, paper: &Paper) -> String {
    format!(
        "{}. {}. {}. {}. doi:{}",
        index,
        paper.first_author_surname(),
        paper.title,
        paper.date,
        paper.doi
    )
}

/// Print every paper, numbered from 1, one line each.
pub fn present<R: BufRead, W: Write>(console: &mut Console<R, W>, papers: &[Paper]) -> io::Result<()> {
    for (i, paper) in papers.iter().enumerate() {
        console.line(format_result_line(i + 1, paper))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaperBuilder, Server};
    use crate::ui::test_support::{console, output};

    #[test]
    fn test_format_result_line() {
        let paper = PaperBuilder::new("10.1101/2024.06.13.000001", "Gut microbes", Server::BioRxiv)
            .authors("Ada Lovelace, Charles Babbage")
            .date("2024-06-13")
            .build();
        assert_eq!(
            format_result_line(3, &paper),
            "3. Lovelace. Gut microbes. 2024-06-13. doi:10.1101/2024.06.13.000001"
        );
    }

    #[test]
    fn test_present_numbers_every_paper() {
        let papers: Vec<Paper> = (0..12)
            .map(|i| PaperBuilder::new(format!("d{}", i), format!("Title {}", i), Server::MedRxiv).build())
            .collect();

        let mut c = console("");
        present(&mut c, &papers).unwrap();
        let out = output(c);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[11].starts_with("12. "));
        assert!(lines[11].ends_with("doi:d11"));
    }

    #[test]
    fn test_present_nothing() {
        let mut c = console("");
        present(&mut c, &[]).unwrap();
        assert!(output(c).is_empty());
    }
}
