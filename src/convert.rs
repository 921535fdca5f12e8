//! Gregorian <-> Hijri conversion through the Julian day number.

use crate::error::{DateError, ParseError};
use crate::gregorian::{GregorianDate, gregorian_to_jdn, jdn_to_gregorian};
use crate::hijri::{HijriDate, hijri_to_jdn, jdn_to_hijri};
use crate::jdn::JulianDayNumber;
use crate::prelude::*;
use crate::types::Calendar;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Converts a Gregorian date to the Hijri date of the same day.
pub fn convert_gregorian_to_hijri(date: GregorianDate) -> HijriDate {
    let jdn = gregorian_to_jdn(date);
    let hijri = jdn_to_hijri(jdn);
    trace!(%date, %jdn, %hijri, "gregorian -> hijri");
    hijri
}

/// Converts a Hijri date to the Gregorian date of the same day.
pub fn convert_hijri_to_gregorian(date: HijriDate) -> GregorianDate {
    let jdn = hijri_to_jdn(date);
    let gregorian = jdn_to_gregorian(jdn);
    trace!(%date, %jdn, %gregorian, "hijri -> gregorian");
    gregorian
}

/// Which way a raw triple is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[display(fmt = "Gregorian to Hijri")]
    GregorianToHijri,
    #[display(fmt = "Hijri to Gregorian")]
    HijriToGregorian,
}

impl Direction {
    /// Calendar the input triple is read in
    pub const fn source(self) -> Calendar {
        match self {
            Self::GregorianToHijri => Calendar::Gregorian,
            Self::HijriToGregorian => Calendar::Hijri,
        }
    }

    /// Calendar the result is expressed in
    pub const fn target(self) -> Calendar {
        match self {
            Self::GregorianToHijri => Calendar::Hijri,
            Self::HijriToGregorian => Calendar::Gregorian,
        }
    }
}

/// A date tagged with its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "calendar", content = "date", rename_all = "lowercase")]
pub enum CalendarDate {
    #[display(fmt = "{_0}")]
    Gregorian(GregorianDate),
    #[display(fmt = "{_0}")]
    Hijri(HijriDate),
}

impl CalendarDate {
    /// Validates a raw triple in `calendar`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple is not a valid date of
    /// that calendar.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        match calendar {
            Calendar::Gregorian => GregorianDate::new(year, month, day).map(Self::Gregorian),
            Calendar::Hijri => HijriDate::new(year, month, day).map(Self::Hijri),
        }
    }

    /// Reads `YYYY-MM-DD` as a date of `calendar`.
    ///
    /// # Errors
    /// Returns `ParseError` if the text is malformed or not a valid date.
    pub fn parse(calendar: Calendar, input: &str) -> Result<Self, ParseError> {
        Ok(match calendar {
            Calendar::Gregorian => Self::Gregorian(input.parse()?),
            Calendar::Hijri => Self::Hijri(input.parse()?),
        })
    }

    pub const fn calendar(&self) -> Calendar {
        match self {
            Self::Gregorian(_) => Calendar::Gregorian,
            Self::Hijri(_) => Calendar::Hijri,
        }
    }

    pub fn jdn(&self) -> JulianDayNumber {
        match *self {
            Self::Gregorian(date) => gregorian_to_jdn(date),
            Self::Hijri(date) => hijri_to_jdn(date),
        }
    }

    /// The same day on the Gregorian calendar
    pub fn to_gregorian(&self) -> GregorianDate {
        match *self {
            Self::Gregorian(date) => date,
            Self::Hijri(date) => convert_hijri_to_gregorian(date),
        }
    }

    /// The same day on the Hijri calendar
    pub fn to_hijri(&self) -> HijriDate {
        match *self {
            Self::Gregorian(date) => convert_gregorian_to_hijri(date),
            Self::Hijri(date) => date,
        }
    }

    /// The same day on `calendar`
    pub fn to_calendar(&self, calendar: Calendar) -> Self {
        match calendar {
            Calendar::Gregorian => Self::Gregorian(self.to_gregorian()),
            Calendar::Hijri => Self::Hijri(self.to_hijri()),
        }
    }

    /// Returns `(year, month, day)` in the date's own calendar
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        match self {
            Self::Gregorian(date) => date.to_ymd(),
            Self::Hijri(date) => date.to_ymd(),
        }
    }
}

impl From<GregorianDate> for CalendarDate {
    fn from(date: GregorianDate) -> Self {
        Self::Gregorian(date)
    }
}

impl From<HijriDate> for CalendarDate {
    fn from(date: HijriDate) -> Self {
        Self::Hijri(date)
    }
}

/// Converts a raw `(year, month, day)` triple in the direction given.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the triple is not a valid date of the
/// source calendar. No partial result is produced.
pub fn convert(direction: Direction, year: i32, month: u8, day: u8) -> Result<CalendarDate, DateError> {
    let source = CalendarDate::new(direction.source(), year, month, day).inspect_err(|err| {
        debug!(%direction, %err, "rejected input");
    })?;
    Ok(source.to_calendar(direction.target()))
}

/// Parses `YYYY-MM-DD` in the source calendar and converts it.
///
/// # Errors
/// Returns `ParseError` if the text is malformed or not a valid date.
pub fn convert_str(direction: Direction, input: &str) -> Result<CalendarDate, ParseError> {
    let source = CalendarDate::parse(direction.source(), input).inspect_err(|err| {
        debug!(%direction, input, %err, "rejected input");
    })?;
    let converted = source.to_calendar(direction.target());
    debug!(%direction, %source, %converted, "converted");
    Ok(converted)
}

/// One day expressed on both calendars, with its day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DualDate {
    pub jdn:       JulianDayNumber,
    pub gregorian: GregorianDate,
    pub hijri:     HijriDate,
}

impl DualDate {
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        Self {
            jdn,
            gregorian: jdn_to_gregorian(jdn),
            hijri: jdn_to_hijri(jdn),
        }
    }
}

impl From<CalendarDate> for DualDate {
    fn from(date: CalendarDate) -> Self {
        Self::from_jdn(date.jdn())
    }
}
