//! Shared `YYYY-MM-DD` reading and writing for both calendars.

use crate::ParseError;
use crate::consts::DATE_SEPARATOR;
use std::fmt;

/// Splits `[-]YYYY-MM-DD` into its raw components without checking ranges.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    };

    let invalid = || ParseError::InvalidFormat(trimmed.to_owned());
    let magnitude: i32 = digits(year).ok_or_else(invalid)?;
    let month: u8 = digits(month).ok_or_else(invalid)?;
    let day: u8 = digits(day).ok_or_else(invalid)?;

    let year = if negative { -magnitude } else { magnitude };
    Ok((year, month, day))
}

/// Parses an unsigned run of ASCII digits; signs and blanks are rejected.
fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Writes a triple as `YYYY-MM-DD`, with a leading `-` for negative years.
pub(crate) fn write_ymd(f: &mut fmt::Formatter<'_>, year: i32, month: u8, day: u8) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}-{month:02}-{day:02}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}
