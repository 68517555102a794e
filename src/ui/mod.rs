//! Interactive console: prompts, status lines, result listing and selection.
//!
//! Everything reads from and writes to a [`Console`], which wraps any
//! `BufRead`/`Write` pair so the whole interaction can be driven from tests.

mod input;
mod presenter;
mod selector;

pub use input::{collect_days, collect_server, collect_term, DAYS_PROMPT, SERVER_PROMPT, TERM_PROMPT};
pub use presenter::{format_result_line, present};
pub use selector::{interpret, run_selector, Selection, SelectorState, SELECT_PROMPT};

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Status icons for different outcomes.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Render a status line, optionally with ANSI colour.
pub fn status_line(status: Status, msg: &str, color: bool) -> String {
    let icon = status_icon(status);
    if !color {
        return format!("{} {}", icon, msg);
    }
    match status {
        Status::Success => format!("{} {}", icon.green().bold(), msg),
        Status::Error => format!("{} {}", icon.red().bold(), msg.red()),
        Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
        Status::Info => format!("{} {}", icon.cyan().bold(), msg),
        Status::Search => format!("{} {}", icon.yellow(), msg.bold()),
    }
}

/// Spinner shown on stderr while a request is in flight.
///
/// Drawn once rather than ticked from a background thread; hidden when
/// stderr is not a terminal.
pub fn fetch_spinner(message: String) -> indicatif::ProgressBar {
    if !io::stderr().is_terminal() {
        return indicatif::ProgressBar::hidden();
    }
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.tick();
    spinner
}

/// Line-oriented console over an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print `label` and read one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line terminator is
    /// stripped; other whitespace is left for the caller. Bytes that are not
    /// UTF-8 become U+FFFD, so such a line is just an answer nobody accepts.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Write a plain line.
    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg)
    }

    /// Write a status line with its icon.
    pub fn status(&mut self, status: Status, msg: impl Display) -> io::Result<()> {
        let line = status_line(status, &msg.to_string(), self.color);
        writeln!(self.output, "{}", line)
    }

    /// Consume the console and return its output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Error for input that ended while a value was still required.
pub(crate) fn input_closed(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("input closed while waiting for {}", what),
    )
}
