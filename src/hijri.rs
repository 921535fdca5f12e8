//! Tabular Hijri dates and their Julian day numbers.
//!
//! The calendar is arithmetic: odd months have 30 days, even months 29, and
//! the twelfth month gains a 30th day in 11 years of every 30-year cycle.
//! A year `y` is a leap year when `(11 * y + 14) mod 30 < 11`, which places
//! the leap years at positions 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of
//! the cycle. Day 1 Muharram 1 AH is [`HIJRI_EPOCH`](crate::HIJRI_EPOCH).

use crate::consts::{
    HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_LEAP_YEARS, HIJRI_CYCLE_YEARS,
    HIJRI_EPOCH, HIJRI_LEAP_OFFSET, HIJRI_LONG_MONTH, HIJRI_SHORT_MONTH, LAST_MONTH, MIN_DAY,
};
use crate::error::{DateError, InvalidReason};
use crate::jdn::JulianDayNumber;
use crate::parse::{parse_ymd, write_ymd};
use crate::types::{Calendar, Month};
use crate::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A valid date in the tabular Hijri calendar.
///
/// Years before 1 AH continue backwards arithmetically (year `0`, `-1`, ...).
/// As with [`GregorianDate`](crate::GregorianDate), the supported span is
/// the dates whose Julian day number fits in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl HijriDate {
    /// Creates a Hijri date, checking month, day and supported range.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month is not 1-12, the day
    /// exceeds the month's length in that year, or the date lies outside the
    /// `JulianDayNumber` range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid = |reason| DateError::invalid(Calendar::Hijri, (year, month, day), reason);

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

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Day of the year, 1 for 1 Muharram
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn day_of_year(&self) -> u16 {
        (months_before(self.month.get() as i64) + self.day as i64) as u16
    }

    pub fn to_jdn(self) -> JulianDayNumber {
        hijri_to_jdn(self)
    }

    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        jdn_to_hijri(jdn)
    }
}

/// Converts a Hijri date to its Julian day number.
#[allow(clippy::cast_possible_truncation)]
pub fn hijri_to_jdn(date: HijriDate) -> JulianDayNumber {
    let wide = ymd_to_jdn(date.year, date.month.get(), date.day);
    // Construction rejects every date whose day number overflows i32.
    debug_assert!(i32::try_from(wide).is_ok());
    JulianDayNumber::new(wide as i32)
}

/// Converts a Julian day number to its Hijri date.
///
/// Total over the whole `JulianDayNumber` range, in both directions from
/// the epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jdn_to_hijri(jdn: JulianDayNumber) -> HijriDate {
    let j = jdn.wide();
    let epoch = i64::from(HIJRI_EPOCH);
    let cycle_days = i64::from(HIJRI_CYCLE_DAYS);
    let cycle_years = i64::from(HIJRI_CYCLE_YEARS);

    // Elapsed cycles and the year inside the cycle in one floor division.
    let year = (cycle_years * (j - epoch) + cycle_days + 15).div_euclid(cycle_days);
    let prior_days = j - day_number(year, 1, 1);
    // prior_days is 0..=354, so month lands in 1..=12
    let month = (11 * prior_days + 330) / 325;
    let day = j - day_number(year, month, 1) + 1;

    HijriDate {
        year:  year as i32,
        month: Month::decoded(month as u8),
        day:   day as u8,
    }
}

pub(crate) fn ymd_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    day_number(i64::from(year), i64::from(month), i64::from(day))
}

/// Epoch plus whole years (354 days each plus the leap days of the years
/// before `year`), whole months, and days into the month.
const fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let leap_days_before = (3 + HIJRI_CYCLE_LEAP_YEARS as i64 * year).div_euclid(HIJRI_CYCLE_YEARS as i64);
    HIJRI_EPOCH as i64 - 1
        + HIJRI_COMMON_YEAR_DAYS as i64 * (year - 1)
        + leap_days_before
        + months_before(month)
        + day
}

/// Days in the months preceding `month`, alternating 30 and 29.
const fn months_before(month: i64) -> i64 {
    HIJRI_SHORT_MONTH as i64 * (month - 1) + month / 2
}

/// Whether the twelfth month of `year` has 30 days.
pub const fn is_leap_year(year: i32) -> bool {
    let position = (HIJRI_CYCLE_LEAP_YEARS as i64 * year as i64 + HIJRI_LEAP_OFFSET as i64)
        .rem_euclid(HIJRI_CYCLE_YEARS as i64);
    position < HIJRI_CYCLE_LEAP_YEARS as i64
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.is_odd() || (month.get() == LAST_MONTH && is_leap_year(year)) {
        HIJRI_LONG_MONTH
    } else {
        HIJRI_SHORT_MONTH
    }
}

/// Number of days in `year`, 354 or 355.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        HIJRI_COMMON_YEAR_DAYS + 1
    } else {
        HIJRI_COMMON_YEAR_DAYS
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ymd(f, self.year, self.month.get(), self.day)
    }
}

impl FromStr for HijriDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl TryFrom<(i32, u8, u8)> for HijriDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<HijriDate> for (i32, u8, u8) {
    fn from(date: HijriDate) -> Self {
        date.to_ymd()
    }
}

impl Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> HijriDate {
        HijriDate::new(year, month, day).unwrap()
    }

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_epoch() {
        let first = date(1, 1, 1);
        assert_eq!(hijri_to_jdn(first).get(), HIJRI_EPOCH);
        assert_eq!(jdn_to_hijri(JulianDayNumber::new(HIJRI_EPOCH)), first);
        assert_eq!(
            jdn_to_hijri(JulianDayNumber::new(HIJRI_EPOCH - 1)).to_ymd(),
            (0, 12, 29)
        );
    }

    #[test]
    fn test_leap_years_in_cycle() {
        let leaps: Vec<i32> = (1..=30).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);

        // the pattern repeats every cycle, including before the epoch
        for y in -90..=90 {
            assert_eq!(is_leap_year(y), is_leap_year(y + 30), "year {y}");
        }
        assert!(is_leap_year(1445));
        assert!(!is_leap_year(1446));
    }

    #[test]
    fn test_cycle_length() {
        for start in [-59, 1, 1441] {
            let days: i32 = (start..start + 30).map(|y| i32::from(days_in_year(y))).sum();
            assert_eq!(days, HIJRI_CYCLE_DAYS, "cycle starting {start}");
            let span = date(start + 30, 1, 1).to_jdn().get() - date(start, 1, 1).to_jdn().get();
            assert_eq!(span, HIJRI_CYCLE_DAYS);
        }
    }

    #[test]
    fn test_month_lengths() {
        for m in 1..=11 {
            let expected = if m % 2 == 1 { 30 } else { 29 };
            assert_eq!(days_in_month(1446, month(m)), expected, "month {m}");
            assert_eq!(days_in_month(1445, month(m)), expected, "month {m}");
        }
        assert_eq!(days_in_month(1445, month(12)), 30);
        assert_eq!(days_in_month(1446, month(12)), 29);
        assert_eq!(days_in_year(1445), 355);
        assert_eq!(days_in_year(1446), 354);
    }

    #[test]
    fn test_leap_day_only_in_leap_years() {
        for y in 1..=60 {
            let result = HijriDate::new(y, 12, 30);
            if is_leap_year(y) {
                let d = result.unwrap();
                let next = jdn_to_hijri(JulianDayNumber::new(d.to_jdn().get() + 1));
                assert_eq!(next.to_ymd(), (y + 1, 1, 1));
            } else {
                assert_eq!(
                    result.unwrap_err().reason(),
                    InvalidReason::DayOutOfRange { max: 29 },
                    "year {y}"
                );
            }
        }
    }

    #[test]
    fn test_invalid_dates() {
        struct TestCase {
            ymd:    (i32, u8, u8),
            reason: InvalidReason,
        }

        let cases = [
            TestCase {
                ymd:    (1446, 2, 30),
                reason: InvalidReason::DayOutOfRange { max: 29 },
            },
            TestCase {
                ymd:    (1446, 1, 31),
                reason: InvalidReason::DayOutOfRange { max: 30 },
            },
            TestCase {
                ymd:    (1446, 1, 0),
                reason: InvalidReason::DayOutOfRange { max: 30 },
            },
            TestCase {
                ymd:    (1446, 0, 1),
                reason: InvalidReason::MonthOutOfRange,
            },
            TestCase {
                ymd:    (1446, 13, 1),
                reason: InvalidReason::MonthOutOfRange,
            },
            TestCase {
                ymd:    (i32::MAX, 1, 1),
                reason: InvalidReason::OutOfSupportedRange,
            },
            TestCase {
                ymd:    (i32::MIN, 1, 1),
                reason: InvalidReason::OutOfSupportedRange,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            let err = HijriDate::new(y, m, d).unwrap_err();
            assert_eq!(err.reason(), case.reason, "{y}-{m}-{d}");
            assert_eq!(err.calendar(), Calendar::Hijri);
        }
    }

    #[test]
    fn test_supported_range_edges() {
        let first = jdn_to_hijri(JulianDayNumber::MIN);
        let last = jdn_to_hijri(JulianDayNumber::MAX);
        assert_eq!(first.to_ymd(), (-6_065_559, 7, 15));
        assert_eq!(last.to_ymd(), (6_054_563, 9, 18));
        assert_eq!(first.to_jdn(), JulianDayNumber::MIN);
        assert_eq!(last.to_jdn(), JulianDayNumber::MAX);

        assert!(HijriDate::new(-6_065_559, 7, 14).is_err());
        assert!(HijriDate::new(6_054_563, 9, 19).is_err());
    }

    #[test]
    fn test_round_trip_around_epoch() {
        let start = HIJRI_EPOCH - 3 * HIJRI_CYCLE_DAYS;
        let end = HIJRI_EPOCH + 3 * HIJRI_CYCLE_DAYS;
        let mut previous: Option<HijriDate> = None;
        for raw in start..=end {
            let h = jdn_to_hijri(JulianDayNumber::new(raw));
            assert_eq!(hijri_to_jdn(h).get(), raw);
            assert_eq!(HijriDate::new(h.year(), h.month(), h.day()), Ok(h));
            if let Some(prev) = previous {
                assert!(prev < h);
            }
            previous = Some(h);
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(1445, 1, 1).day_of_year(), 1);
        assert_eq!(date(1445, 2, 1).day_of_year(), 31);
        assert_eq!(date(1445, 3, 1).day_of_year(), 60);
        assert_eq!(date(1445, 12, 30).day_of_year(), 355);
        assert_eq!(date(1446, 12, 29).day_of_year(), 354);
    }

    #[test]
    fn test_parse_and_display() {
        let h: HijriDate = "1445-09-01".parse().unwrap();
        assert_eq!(h, date(1445, 9, 1));
        assert_eq!(h.to_string(), "1445-09-01");
        assert_eq!(date(990, 9, 17).to_string(), "0990-09-17");

        let before: HijriDate = "-1245-12-09".parse().unwrap();
        assert_eq!(before.to_ymd(), (-1245, 12, 9));
        assert_eq!(before.to_string(), "-1245-12-09");

        assert!(matches!(
            "1446-12-30".parse::<HijriDate>(),
            Err(ParseError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_serde() {
        let h = date(1445, 12, 30);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"1445-12-30\"");
        let parsed: HijriDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, h);

        assert!(serde_json::from_str::<HijriDate>("\"1446-12-30\"").is_err());
    }
}
