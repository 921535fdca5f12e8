//! Convert dates between the proleptic Gregorian calendar and the tabular
//! Hijri calendar.
//!
//! Both calendars are decoded to and encoded from a [`JulianDayNumber`], a
//! continuous day count with no calendar of its own. All conversions are
//! pure integer arithmetic.
//!
//! ```
//! use hijri_date::{GregorianDate, HijriDate, convert_gregorian_to_hijri};
//!
//! let adoption = GregorianDate::new(1582, 10, 15).unwrap();
//! let hijri = convert_gregorian_to_hijri(adoption);
//!
//! assert_eq!(hijri, HijriDate::new(990, 9, 17).unwrap());
//! assert_eq!(hijri.to_string(), "0990-09-17");
//! ```
//!
//! Raw triples go through [`convert`], which validates them first:
//!
//! ```
//! use hijri_date::{Direction, convert};
//!
//! let date = convert(Direction::HijriToGregorian, 1445, 9, 1).unwrap();
//! assert_eq!(date.to_string(), "2024-03-11");
//!
//! // February 2021 has 28 days
//! assert!(convert(Direction::GregorianToHijri, 2021, 2, 30).is_err());
//! ```
//!
//! # Leap years
//!
//! Several tabular Hijri schemes exist. This crate uses the one where year
//! `y` is a leap year when `(11 * y + 14) mod 30 < 11`, with the epoch
//! 1 Muharram 1 AH = Julian day 1948440.

mod consts;
mod convert;
mod error;
pub mod gregorian;
pub mod hijri;
mod jdn;
mod parse;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    CalendarDate, Direction, DualDate, convert, convert_gregorian_to_hijri,
    convert_hijri_to_gregorian, convert_str,
};
pub use error::{DateError, InvalidReason, ParseError};
pub use gregorian::{GregorianDate, gregorian_to_jdn, jdn_to_gregorian};
pub use hijri::{HijriDate, hijri_to_jdn, jdn_to_hijri};
pub use jdn::JulianDayNumber;
pub use types::{Calendar, Month};

