//! The interactive pipeline: collect, fetch, filter, list, select.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::models::SearchQuery;
use crate::sources::{fetch_recent, Source};
use crate::ui::{self, Console, Status};
use crate::utils::{filter_papers, BrowserLauncher};

/// How a run ended, for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The query ran; possibly nothing matched
    Success,
    /// Retrieval failed and there was nothing to show
    Failure,
}

impl RunOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Success => ExitCode::SUCCESS,
            RunOutcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run one full interactive session against `source`.
///
/// Console I/O errors (including input closing before all parameters were
/// given) are returned as `Err`; everything else is reported on the console
/// and folded into the outcome.
pub async fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    source: &dyn Source,
    launcher: &dyn BrowserLauncher,
    today: NaiveDate,
) -> io::Result<RunOutcome> {
    let server = ui::collect_server(console)?;
    let days = ui::collect_days(console)?;
    let term = ui::collect_term(console)?;

    let query = SearchQuery::new(server, days, term);
    search_and_select(console, source, launcher, &query, today).await
}

/// Fetch, filter and list papers for `query`, then hand selections to `launcher`.
pub async fn search_and_select<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    source: &dyn Source,
    launcher: &dyn BrowserLauncher,
    query: &SearchQuery,
    today: NaiveDate,
) -> io::Result<RunOutcome> {
    let spinner = ui::fetch_spinner(format!(
        "Fetching the last {} day(s) of {} preprints...",
        query.days, query.server
    ));
    let fetched = fetch_recent(source, query, today).await;
    spinner.finish_and_clear();

    let papers = match fetched {
        Ok(papers) => papers,
        Err(e) => {
            tracing::debug!(error = %e, "retrieval failed");
            console.status(Status::Error, e)?;
            return Ok(RunOutcome::Failure);
        }
    };

    if papers.is_empty() {
        console.status(Status::Info, "No results found")?;
        return Ok(RunOutcome::Success);
    }

    let matches = filter_papers(&papers, &query.term);
    if matches.is_empty() {
        console.status(
            Status::Info,
            format!(
                "No papers matched \"{}\" among {} retrieved",
                query.term,
                papers.len()
            ),
        )?;
        return Ok(RunOutcome::Success);
    }

    console.status(
        Status::Search,
        format!(
            "{} of {} {} papers match \"{}\"",
            matches.len(),
            papers.len(),
            query.server,
            query.term
        ),
    )?;
    console.line("Results:")?;
    ui::present(console, &matches)?;
    ui::run_selector(console, &matches, launcher)?;

    Ok(RunOutcome::Success)
}
