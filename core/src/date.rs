//! Birth-date text parsing
//!
//! Accepts exactly two shapes — day-first `DD.MM.YYYY` and year-first
//! `YYYY.MM.DD` — with `.`, `-`, or `/` as the separator. Anything else is
//! rejected rather than guessed at.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Errors from turning user text into a calendar date
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("'{0}' is not a recognized date format (expected DD.MM.YYYY or YYYY-MM-DD)")]
    UnrecognizedFormat(String),

    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
}

static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").unwrap());

static YEAR_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\.(\d{1,2})\.(\d{1,2})$").unwrap());

/// Parse birth-date text in either accepted shape.
///
/// `02.03.2000`, `02-03-2000`, `02/03/2000`, `2000.03.02`, `2000-03-02`, and
/// `2000/03/02` all parse; `02.03.2000` means 2 March 2000 (day first).
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let normalized = text.trim().replace(['-', '/'], ".");

    let (year, month, day) = if let Some(caps) = DAY_FIRST.captures(&normalized) {
        (field(&caps, 3), field(&caps, 2) as u32, field(&caps, 1) as u32)
    } else if let Some(caps) = YEAR_FIRST.captures(&normalized) {
        (field(&caps, 1), field(&caps, 2) as u32, field(&caps, 3) as u32)
    } else {
        return Err(DateParseError::UnrecognizedFormat(text.trim().to_string()));
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::ImpossibleDate { year, month, day })
}

fn field(caps: &regex::Captures<'_>, idx: usize) -> i32 {
    // Captures are all-digit groups of at most 4 chars, so this cannot fail.
    caps[idx].parse().unwrap_or(0)
}
