//! Proleptic Gregorian dates and their Julian day numbers.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MIN_DAY,
};
use crate::error::{DateError, InvalidReason};
use crate::jdn::JulianDayNumber;
use crate::parse::{parse_ymd, write_ymd};
use crate::types::{Calendar, Month};
use crate::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A valid date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: 1 BC is year `0`, 2 BC is `-1`.
/// The supported span is exactly the dates whose Julian day number fits
/// in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl GregorianDate {
    /// Creates a Gregorian date, checking month, day and supported range.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month is not 1-12, the day is
    /// not valid for that month of that year, or the date lies outside the
    /// `JulianDayNumber` range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid = |reason| DateError::invalid(Calendar::Gregorian, (year, month, day), reason);

        let month_typed = Month::new(month).map_err(invalid)?;
        let max = days_in_month(year, month_typed);
        if day < MIN_DAY || day > max {
            return Err(invalid(InvalidReason::DayOutOfRange { max }));
        }
        if JulianDayNumber::from_wide(ymd_to_jdn(year, month, day)).is_none() {
            return Err(invalid(InvalidReason::OutOfSupportedRange));
        }

        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Returns the (astronomical) year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    /// Whether this date falls in a Gregorian leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Day of the year, 1 for January 1st
    pub fn day_of_year(&self) -> u16 {
        let before: u16 = (1..self.month.get())
            .filter_map(|m| Month::new(m).ok())
            .map(|m| u16::from(days_in_month(self.year, m)))
            .sum();
        before + u16::from(self.day)
    }

    /// Julian day number of this date
    pub fn to_jdn(self) -> JulianDayNumber {
        gregorian_to_jdn(self)
    }

    /// Gregorian date of a Julian day number
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        jdn_to_gregorian(jdn)
    }
}

/// Converts a Gregorian date to its Julian day number.
#[allow(clippy::cast_possible_truncation)]
pub fn gregorian_to_jdn(date: GregorianDate) -> JulianDayNumber {
    let wide = ymd_to_jdn(date.year, date.month.get(), date.day);
    // Construction rejects every date whose day number overflows i32.
    debug_assert!(i32::try_from(wide).is_ok());
    JulianDayNumber::new(wide as i32)
}

/// Converts a Julian day number to its Gregorian date.
///
/// Total over the whole `JulianDayNumber` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jdn_to_gregorian(jdn: JulianDayNumber) -> GregorianDate {
    let a = jdn.wide() + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    // c, d, e and m are non-negative from here on
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    GregorianDate {
        year:  year as i32,
        month: Month::decoded(month as u8),
        day:   day as u8,
    }
}

/// Day number in i64, with January and February counted as months 13 and
/// 14 of the previous year.
pub(crate) fn ymd_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let a = i64::from((14 - month) / 12);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;

    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Number of days in `year`.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ymd(f, self.year, self.month.get(), self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<GregorianDate> for (i32, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        date.to_ymd()
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
