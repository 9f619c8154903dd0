use std::fmt;

use num_integer::Integer;

use crate::epoch;
use crate::Error;

const GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const MIN_YEAR: i32 = 1;
pub(crate) const MAX_YEAR: i32 = 9999;

pub fn is_leap_year(year: i32) -> bool {
    // Get offset into cycle first so negative years follow the same rule.
    let year = year.mod_floor(&400);
    year % 4 == 0 && (year % 100 != 0 || year == 0)
}

/// Number of days in `month` (1-12) of `year`.
///
/// # Panics
///
/// Panics if `month` is not in the range 1-12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    assert!((1..=12).contains(&month), "Month must be in range 1-12");
    if month == 2 && is_leap_year(year) {
        29
    } else {
        GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR[(month - 1) as usize]
    }
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// A date in the proleptic Gregorian calendar, from 0001-01-01 to 9999-12-31.
///
/// The derived ordering is chronological since fields are compared from year
/// down to day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a date, failing with [`Error::InvalidDate`] unless `day` exists
    /// in `month` of `year`.
    ///
    /// ```
    /// use lunisolar::GregorianDate;
    ///
    /// assert!(GregorianDate::new(2000, 2, 29).is_ok());
    /// assert!(GregorianDate::new(1900, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        let invalid = Error::InvalidDate { year, month, day };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(invalid);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(GregorianDate { year, month, day })
    }

    // Callers must pass a date that `new` would accept.
    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        GregorianDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Signed number of days relative to [`epoch::EPOCH`] (2001-01-24).
    pub fn absolute_day(&self) -> i64 {
        epoch::absolute_day(*self)
    }

    /// Inverse of [`GregorianDate::absolute_day`].
    pub fn from_absolute_day(absolute_day: i64) -> Result<Self, Error> {
        epoch::from_absolute_day(absolute_day)
    }

    /// Number of days from `self` to `other`; negative if `other` is earlier.
    ///
    /// ```
    /// use lunisolar::GregorianDate;
    ///
    /// let from = GregorianDate::new(2024, 2, 10).unwrap();
    /// let to = GregorianDate::new(2025, 1, 29).unwrap();
    /// assert_eq!(354, from.days_until(to));
    /// assert_eq!(-354, to.days_until(from));
    /// ```
    pub fn days_until(&self, other: GregorianDate) -> i64 {
        epoch::days_between(*self, other)
    }

    /// Moves the date by `days`, which may be negative. Fails with
    /// [`Error::OutOfRange`] if the result leaves the supported year range.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, Error> {
        let absolute_day = self.absolute_day();
        let target = absolute_day
            .checked_add(days)
            .ok_or(Error::OutOfRange { absolute_day })?;
        Self::from_absolute_day(target)
    }

    pub(crate) fn day_of_year(&self) -> u16 {
        let days_before_month: u16 = (1..self.month)
            .map(|month| days_in_month(self.year, month) as u16)
            .sum();
        days_before_month + self.day as u16
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
