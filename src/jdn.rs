use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A continuous day count, the calendar-neutral value both codecs meet at.
///
/// Every `i32` value maps to exactly one valid date on each calendar, so
/// decoding never fails. Day 0 is -4713-11-24 (proleptic Gregorian).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDayNumber(i32);

impl JulianDayNumber {
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the day number as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Narrows a day count computed in i64, `None` if it does not fit
    pub(crate) fn from_wide(value: i64) -> Option<Self> {
        i32::try_from(value).ok().map(Self)
    }

    #[inline]
    pub(crate) const fn wide(self) -> i64 {
        self.0 as i64
    }
}
