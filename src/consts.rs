/// Maximum valid month (the twelfth month of either calendar)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December / Dhu al-Hijjah
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Julian day number of 2000-01-01 (Gregorian)
pub const J2000_JDN: i32 = 2_451_545;

/// Julian day number of 1 Muharram 1 AH (Julian 622-07-16, the civil epoch)
pub const HIJRI_EPOCH: i32 = 1_948_440;

/// Length of a long (odd-numbered) Hijri month
pub const HIJRI_LONG_MONTH: u8 = 30;
/// Length of a short (even-numbered) Hijri month
pub const HIJRI_SHORT_MONTH: u8 = 29;

/// Days in a common Hijri year
pub const HIJRI_COMMON_YEAR_DAYS: u16 = 354;

/// Years in one intercalation cycle
pub const HIJRI_CYCLE_YEARS: i32 = 30;
/// Leap years per intercalation cycle
pub const HIJRI_CYCLE_LEAP_YEARS: i32 = 11;
/// Days in one intercalation cycle: 30 * 354 + 11
pub const HIJRI_CYCLE_DAYS: i32 = 10_631;

/// Offset in the leap predicate `(11 * year + 14) % 30 < 11`
pub(crate) const HIJRI_LEAP_OFFSET: i32 = 14;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
