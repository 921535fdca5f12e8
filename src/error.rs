use crate::consts::MAX_MONTH;
use crate::prelude::*;
use crate::types::Calendar;

/// Why a `(year, month, day)` triple was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidReason {
    #[display(fmt = "month must be 1-{}", MAX_MONTH)]
    MonthOutOfRange,
    #[display(fmt = "day must be 1-{max}")]
    DayOutOfRange { max: u8 },
    #[display(fmt = "outside the supported Julian day range")]
    OutOfSupportedRange,
}

/// Error type for date construction and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The triple violates the month or month-length rules of its calendar.
    #[error("Invalid {calendar} date {year}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        calendar: Calendar,
        year:     i32,
        month:    u8,
        day:      u8,
        reason:   InvalidReason,
    },
}

impl DateError {
    pub(crate) const fn invalid(
        calendar: Calendar,
        (year, month, day): (i32, u8, u8),
        reason: InvalidReason,
    ) -> Self {
        Self::InvalidDate {
            calendar,
            year,
            month,
            day,
            reason,
        }
    }

    /// Returns the rejection reason
    pub const fn reason(&self) -> InvalidReason {
        match *self {
            Self::InvalidDate { reason, .. } => reason,
        }
    }

    /// Returns the calendar the rejected triple was meant for
    pub const fn calendar(&self) -> Calendar {
        match *self {
            Self::InvalidDate { calendar, .. } => calendar,
        }
    }
}

/// Error type for reading dates from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Unknown calendar: {_0} (expected gregorian or hijri)")]
    UnknownCalendar(String),
    #[display(fmt = "{_0}")]
    InvalidDate(DateError),
}

impl std::error::Error for ParseError {}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        Self::InvalidDate(err)
    }
}
