use crate::ParseError;
use crate::consts::MAX_MONTH;
use crate::error::InvalidReason;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// The calendar a date triple belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Hijri")]
    Hijri,
}

impl FromStr for Calendar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" | "g" => Ok(Self::Gregorian),
            "hijri" | "h" | "islamic" => Ok(Self::Hijri),
            _ => Err(ParseError::UnknownCalendar(s.to_owned())),
        }
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
/// Both calendars number their twelve months the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidReason::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidReason> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidReason::MonthOutOfRange)?;
        if value > MAX_MONTH {
            return Err(InvalidReason::MonthOutOfRange);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Wraps a month produced by a day-number decoder, which is always 1-12
    pub(crate) fn decoded(value: u8) -> Self {
        debug_assert!((1..=MAX_MONTH).contains(&value));
        Self::new(value).unwrap_or_else(|_| unreachable!("decoded month {value} out of range"))
    }

    /// Months 1, 3, 5... are the long months of the Hijri year
    #[inline]
    pub const fn is_odd(self) -> bool {
        self.get() % 2 == 1
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidReason;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert_eq!(Month::new(0), Err(InvalidReason::MonthOutOfRange));
        assert_eq!(Month::new(13), Err(InvalidReason::MonthOutOfRange));
        assert_eq!(Month::new(255), Err(InvalidReason::MonthOutOfRange));
    }

    #[test]
    fn test_month_parity() {
        let odd: Vec<u8> = (1..=12)
            .filter(|&m| Month::new(m).unwrap().is_odd())
            .collect();
        assert_eq!(odd, vec![1, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn test_month_conversions() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);
        let value: u8 = month.into();
        assert_eq!(value, 8);
        assert_eq!(month.to_string(), "8");

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_ordering() {
        let m1 = Month::new(3).unwrap();
        let m2 = Month::new(8).unwrap();
        assert!(m1 < m2);
        assert_eq!(m1, m1);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(9).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "9");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_calendar_from_str() {
        struct TestCase {
            input:    &'static str,
            expected: Option<Calendar>,
        }

        let cases = [
            TestCase {
                input:    "gregorian",
                expected: Some(Calendar::Gregorian),
            },
            TestCase {
                input:    " Hijri ",
                expected: Some(Calendar::Hijri),
            },
            TestCase {
                input:    "islamic",
                expected: Some(Calendar::Hijri),
            },
            TestCase {
                input:    "julian",
                expected: None,
            },
        ];

        for case in &cases {
            assert_eq!(case.input.parse::<Calendar>().ok(), case.expected, "{}", case.input);
        }
    }

    #[test]
    fn test_calendar_display_and_serde() {
        assert_eq!(Calendar::Gregorian.to_string(), "Gregorian");
        assert_eq!(Calendar::Hijri.to_string(), "Hijri");
        assert_eq!(serde_json::to_string(&Calendar::Hijri).unwrap(), "\"hijri\"");
    }
}
