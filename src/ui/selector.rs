//! Selection loop: open papers by number until the user quits.

use std::io::{self, BufRead, Write};

use super::{Console, Status};
use crate::models::Paper;
use crate::utils::BrowserLauncher;

pub const SELECT_PROMPT: &str = "\nEnter article number to open in browser (q to quit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    AwaitingSelection,
    Terminated,
}

/// What one line of input asks for
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    Quit,
    Open(&'a Paper),
    Invalid,
}

/// Interpret one answer against the listed papers (numbered from 1).
pub fn interpret<'a>(answer: &str, papers: &'a [Paper]) -> Selection<'a> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("q") {
        return Selection::Quit;
    }
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| papers.get(i))
        .map_or(Selection::Invalid, Selection::Open)
}

fn step<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    answer: &str,
    papers: &[Paper],
    launcher: &dyn BrowserLauncher,
    opened: &mut usize,
) -> io::Result<SelectorState> {
    match interpret(answer, papers) {
        Selection::Quit => return Ok(SelectorState::Terminated),
        Selection::Invalid => console.status(
            Status::Warning,
            format!("Invalid input: enter a number from 1 to {} or q", papers.len()),
        )?,
        Selection::Open(paper) => {
            let url = paper.doi_url();
            match launcher.open(&url) {
                Ok(()) => {
                    *opened += 1;
                    console.status(Status::Success, format!("Opened {}", url))?;
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "browser launch failed");
                    console.status(Status::Error, format!("Error opening browser: {}", e))?;
                }
            }
        }
    }
    Ok(SelectorState::AwaitingSelection)
}

/// Prompt for selections until the user quits or input ends.
///
/// Returns how many papers were handed to the browser.
pub fn run_selector<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    papers: &[Paper],
    launcher: &dyn BrowserLauncher,
) -> io::Result<usize> {
    let mut state = SelectorState::AwaitingSelection;
    let mut opened = 0;

    while state == SelectorState::AwaitingSelection {
        state = match console.prompt(SELECT_PROMPT)? {
            Some(answer) => step(console, &answer, papers, launcher, &mut opened)?,
            None => SelectorState::Terminated,
        };
    }

    tracing::debug!(opened, "selection finished");
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Server;
    use crate::ui::test_support::{console, console_bytes, output};
    use crate::utils::RecordingBrowser;

    fn papers() -> Vec<Paper> {
        vec![
            Paper::new("10.1101/a".to_string(), "A".to_string(), Server::BioRxiv),
            Paper::new("10.1101/b".to_string(), "B".to_string(), Server::BioRxiv),
        ]
    }

    #[test]
    fn test_interpret() {
        let papers = papers();
        assert_eq!(interpret("q", &papers), Selection::Quit);
        assert_eq!(interpret(" Q ", &papers), Selection::Quit);
        assert_eq!(interpret("1", &papers), Selection::Open(&papers[0]));
        assert_eq!(interpret("2\r", &papers), Selection::Open(&papers[1]));
        assert_eq!(interpret("0", &papers), Selection::Invalid);
        assert_eq!(interpret("3", &papers), Selection::Invalid);
        assert_eq!(interpret("-1", &papers), Selection::Invalid);
        assert_eq!(interpret("one", &papers), Selection::Invalid);
        assert_eq!(interpret("quit", &papers), Selection::Invalid);
        assert_eq!(interpret("1", &[]), Selection::Invalid);
    }

    #[test]
    fn test_quit_launches_nothing() {
        let browser = RecordingBrowser::new();
        let mut c = console("Q\n1\n");
        let opened = run_selector(&mut c, &papers(), &browser).unwrap();

        assert_eq!(opened, 0);
        assert!(browser.opened().is_empty());
        assert_eq!(output(c).matches(SELECT_PROMPT).count(), 1);
    }

    #[test]
    fn test_out_of_range_reports_and_continues() {
        let browser = RecordingBrowser::new();
        let mut c = console("0\n3\nx\nq\n");
        run_selector(&mut c, &papers(), &browser).unwrap();

        assert!(browser.opened().is_empty());
        assert_eq!(output(c).matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_multiple_opens_in_one_session() {
        let browser = RecordingBrowser::new();
        let mut c = console("2\n1\n2\nq\n");
        let opened = run_selector(&mut c, &papers(), &browser).unwrap();

        assert_eq!(opened, 3);
        assert_eq!(
            browser.opened(),
            vec![
                "https://doi.org/10.1101/b",
                "https://doi.org/10.1101/a",
                "https://doi.org/10.1101/b",
            ]
        );
    }

    #[test]
    fn test_browser_failure_is_not_fatal() {
        let browser = RecordingBrowser::failing("no display available");
        let mut c = console("1\n2\nq\n");
        let opened = run_selector(&mut c, &papers(), &browser).unwrap();

        assert_eq!(opened, 0);
        assert_eq!(browser.opened().len(), 2);
        assert_eq!(output(c).matches("Error opening browser: no display available").count(), 2);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let browser = RecordingBrowser::new();
        let mut c = console("1\n");
        assert_eq!(run_selector(&mut c, &papers(), &browser).unwrap(), 1);
    }

    #[test]
    fn test_undecodable_line_is_invalid_not_fatal() {
        let browser = RecordingBrowser::new();
        let mut c = console_bytes(b"\xff\xfe\n1\nq\n");
        let opened = run_selector(&mut c, &papers(), &browser).unwrap();

        assert_eq!(opened, 1);
        assert_eq!(browser.opened(), vec!["https://doi.org/10.1101/a"]);
        assert_eq!(output(c).matches("Invalid input").count(), 1);
    }
}
