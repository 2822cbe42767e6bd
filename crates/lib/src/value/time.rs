//! Timestamp parsing against a fixed, ordered format table.
//!
//! Text timestamps are tried against each format in order and the first one
//! that parses wins. When no format matches, the error from the last attempt
//! is reported. Zone abbreviations ("UTC", "PDT") cannot be resolved without
//! a zone database: a bare abbreviation yields offset zero, and an
//! abbreviation following a numeric offset is validated and discarded.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use thiserror::Error;

/// Failure to parse a timestamp string against one format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TimeParseError {
    #[error("{0}")]
    Chrono(#[from] chrono::ParseError),

    /// The input does not have the shape the format requires.
    #[error("{0}")]
    Shape(&'static str),
}

/// One entry in the ordered format table.
#[derive(Debug, Clone, Copy)]
enum Format {
    /// `2017-07-10T12:13:47Z`
    IsoZulu,
    /// `2017-07-10 12:13:47 -0700`
    NumericOffset,
    /// `2017-07-10 12:13:47 UTC`
    ZoneName,
    /// `2017-07-10 12:13:47 -0700 PDT`
    NumericOffsetZoneName,
    /// `Mon, 10 Jul 2017 12:13:47 GMT`
    Rfc1123,
    /// `10/Jul/2017:12:13:47 -0700`
    CommonLog,
}

/// Candidate formats, tried in order. First successful parse wins.
const FORMATS: [Format; 6] = [
    Format::IsoZulu,
    Format::NumericOffset,
    Format::ZoneName,
    Format::NumericOffsetZoneName,
    Format::Rfc1123,
    Format::CommonLog,
];

impl Format {
    fn parse(self, input: &str) -> Result<DateTime<FixedOffset>, TimeParseError> {
        match self {
            Format::IsoZulu => {
                let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%SZ")?;
                Ok(naive.and_utc().fixed_offset())
            }
            Format::NumericOffset => {
                Ok(DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S %z")?)
            }
            Format::ZoneName => {
                let (head, _zone) = split_zone_abbreviation(input)?;
                let naive = NaiveDateTime::parse_from_str(head, "%Y-%m-%d %H:%M:%S")?;
                Ok(naive.and_utc().fixed_offset())
            }
            Format::NumericOffsetZoneName => {
                let (head, _zone) = split_zone_abbreviation(input)?;
                Ok(DateTime::parse_from_str(head, "%Y-%m-%d %H:%M:%S %z")?)
            }
            Format::Rfc1123 => Ok(DateTime::parse_from_rfc2822(input)?),
            Format::CommonLog => Ok(DateTime::parse_from_str(input, "%d/%b/%Y:%H:%M:%S %z")?),
        }
    }
}

/// Splits a trailing alphabetic zone abbreviation off the input.
fn split_zone_abbreviation(input: &str) -> Result<(&str, &str), TimeParseError> {
    match input.rsplit_once(' ') {
        Some((head, zone))
            if !zone.is_empty() && zone.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            Ok((head, zone))
        }
        _ => Err(TimeParseError::Shape(
            "expected a trailing zone abbreviation",
        )),
    }
}

/// Parses a timestamp string, trying each table entry in order.
///
/// Returns the first successful parse; if every format fails, returns the
/// error observed on the last attempt.
pub(crate) fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let mut last_err = None;
    for format in FORMATS {
        match format.parse(input) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.expect("format table is non-empty"))
}
