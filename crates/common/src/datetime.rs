//! Date formatting and parsing.
//!
//! Output uses one fixed English long form, `"January 15, 2024"`, regardless
//! of the host locale or time zone.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::UtilError;

/// en-US long date: full month name, unpadded day, four-digit year.
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Anything [`format_date`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// A plain calendar date
    Date(NaiveDate),
    /// A UTC timestamp; its UTC calendar date is formatted
    Utc(DateTime<Utc>),
    /// A timestamp with offset; the date in that offset is formatted
    Offset(DateTime<FixedOffset>),
    /// Text to interpret with [`parse_date`] first
    Text(Cow<'a, str>),
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Offset(dt)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for DateInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl DateInput<'_> {
    /// Resolves the input to the calendar date that will be formatted.
    pub fn to_naive_date(&self) -> Result<NaiveDate, UtilError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Utc(dt) => Ok(dt.date_naive()),
            Self::Offset(dt) => Ok(dt.date_naive()),
            Self::Text(text) => parse_date(text),
        }
    }
}

/// Formats a date or date text as `"<Month> <day>, <year>"`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use utilkit_common::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(format_date(date).unwrap(), "January 15, 2024");
/// assert_eq!(format_date("2024-06-20").unwrap(), "June 20, 2024");
/// assert!(format_date("not-a-date").is_err());
/// ```
///
/// # Errors
///
/// Returns [`UtilError::InvalidDate`] if text input cannot be read as a date.
/// Structured inputs never fail.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> Result<String, UtilError> {
    let date = input.into().to_naive_date()?;
    Ok(format_naive_date(date))
}

/// Formats an already-structured date. Infallible form of [`format_date`].
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Interprets text as a calendar date.
///
/// Accepts, after trimming whitespace:
/// - `YYYY-MM-DD`
/// - RFC3339 timestamps (`2024-01-15T10:30:00+05:00`); the date in the
///   timestamp's own offset is used
/// - naive timestamps (`2024-01-15T10:30:00`, optional fractional seconds)
///
/// # Errors
///
/// Returns [`UtilError::InvalidDate`] for anything else. A date is never
/// guessed or substituted.
pub fn parse_date(text: &str) -> Result<NaiveDate, UtilError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UtilError::invalid_date(text, "empty input"));
    }

    let date_only_err = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    tracing::debug!(input = trimmed, error = %date_only_err, "Rejected date text");
    Err(UtilError::invalid_date(text, date_only_err.to_string()))
}
