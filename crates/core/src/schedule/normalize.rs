//! Canonical local-date handling for loosely-typed task dates.
//!
//! The upstream service serves dates in three shapes: `YYYY-MM-DD`,
//! `YYYY-MM-DDTHH:mm:ss`, or a full instant. Date-only strings are parsed
//! from their year/month/day components directly - running them through an
//! epoch-based parser would pin them to UTC midnight and shift them one day
//! backward when rendered in a negative-offset locale.

use chrono::{Local, NaiveDate, NaiveDateTime};
use planboard_domain::constants::LOCAL_DATE_FORMAT;
use planboard_domain::{DateInput, PlanboardError, Result};

const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_LEN: usize = 10;
const DATETIME_LEN: usize = 19;

/// A canonical local date plus a flag recording whether the fallback was
/// used.
///
/// Downstream grouping would otherwise mask missing source data as "today"
/// tasks; the flag keeps the degradation observable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDate {
    pub date: NaiveDate,
    pub fell_back: bool,
}

/// Parse a raw date string into a local calendar date.
///
/// Accepts exactly `YYYY-MM-DD` and `YYYY-MM-DDTHH:mm:ss`; the time-of-day
/// portion is stripped after local-component extraction.
///
/// # Errors
/// `InvalidDate` for any other shape, leaving the fallback policy to the
/// caller.
pub fn parse_local(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    match trimmed.len() {
        DATE_LEN => NaiveDate::parse_from_str(trimmed, LOCAL_DATE_FORMAT)
            .map_err(|_| PlanboardError::InvalidDate(trimmed.to_string())),
        DATETIME_LEN => NaiveDateTime::parse_from_str(trimmed, LOCAL_DATETIME_FORMAT)
            .map(|datetime| datetime.date())
            .map_err(|_| PlanboardError::InvalidDate(trimmed.to_string())),
        _ => Err(PlanboardError::InvalidDate(trimmed.to_string())),
    }
}

/// Normalize a loosely-typed date field into a canonical local date.
///
/// Missing input falls back (conventionally "today") and is flagged - never
/// an error. Instants are converted to the local calendar date with the
/// time-of-day discarded.
///
/// # Errors
/// `InvalidDate` for an unparsable string, so the caller can apply its own
/// fallback policy and record the degradation.
pub fn normalize(input: Option<&DateInput>, fallback: NaiveDate) -> Result<NormalizedDate> {
    match input {
        None => Ok(NormalizedDate { date: fallback, fell_back: true }),
        Some(DateInput::Instant(instant)) => Ok(NormalizedDate {
            date: instant.with_timezone(&Local).date_naive(),
            fell_back: false,
        }),
        Some(DateInput::Text(raw)) => {
            parse_local(raw).map(|date| NormalizedDate { date, fell_back: false })
        }
    }
}

/// Format a canonical date in its `YYYY-MM-DD` week/day key form.
///
/// Inverse of [`parse_local`] for date-only input:
/// `format_local(parse_local(s)?) == s` for any well-formed `YYYY-MM-DD`.
pub fn format_local(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}
