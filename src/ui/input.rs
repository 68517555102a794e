//! Prompts for the three search parameters.
//!
//! Invalid answers are reported and asked again, without limit. Input closing
//! early is the only way out, reported as `UnexpectedEof`.

use std::io::{self, BufRead, Write};

use super::{input_closed, Console, Status};
use crate::models::Server;

pub const SERVER_PROMPT: &str = "Enter server (biorxiv, medrxiv): ";
pub const DAYS_PROMPT: &str = "Enter number of days back to search: ";
pub const TERM_PROMPT: &str = "Enter search term: ";

/// Ask until the answer names a known server.
pub fn collect_server<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Server> {
    loop {
        let answer = console
            .prompt(SERVER_PROMPT)?
            .ok_or_else(|| input_closed("a server"))?;
        match answer.parse::<Server>() {
            Ok(server) => return Ok(server),
            Err(e) => console.status(Status::Warning, format!("Invalid input: {}", e))?,
        }
    }
}

/// Why a day count was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DaysRejection {
    NotAnInteger,
    NotPositive,
}

fn parse_days(answer: &str) -> Result<u32, DaysRejection> {
    let answer = answer.trim();
    let (negative, digits) = match answer.as_bytes().first() {
        Some(b'-') => (true, &answer[1..]),
        Some(b'+') => (false, &answer[1..]),
        _ => (false, answer),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DaysRejection::NotAnInteger);
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(DaysRejection::NotPositive);
    }
    // Only overflow can fail here; such counts saturate.
    Ok(digits.parse().unwrap_or(u32::MAX))
}

/// Ask until the answer is a positive integer.
///
/// Upper bounds are not checked here; retrieval rejects windows it cannot serve.
pub fn collect_days<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<u32> {
    loop {
        let answer = console
            .prompt(DAYS_PROMPT)?
            .ok_or_else(|| input_closed("a number of days"))?;
        match parse_days(&answer) {
            Ok(days) => return Ok(days),
            Err(DaysRejection::NotAnInteger) => console.status(
                Status::Warning,
                format!("Invalid input: '{}' is not an integer", answer.trim()),
            )?,
            Err(DaysRejection::NotPositive) => console.status(
                Status::Warning,
                "Invalid input: number of days must be positive",
            )?,
        }
    }
}

/// Ask once; any answer, including an empty one, is accepted.
pub fn collect_term<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
    console
        .prompt(TERM_PROMPT)?
        .ok_or_else(|| input_closed("a search term"))
}
