//! Day counting relative to the lunar epoch.
//!
//! Gregorian 2001-01-24 is lunar 2001-01-01 and is absolute day 0. Later dates
//! count upwards and earlier dates are negative.

use num_integer::Integer;

use crate::gregorian::{GregorianDate, MAX_YEAR, MIN_YEAR};
use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::Error;

pub const EPOCH: GregorianDate = GregorianDate::from_parts_unchecked(2001, 1, 24);

/// Number of days from [`EPOCH`] to `date`.
///
/// ```
/// use lunisolar::{epoch, GregorianDate};
///
/// assert_eq!(0, epoch::absolute_day(epoch::EPOCH));
/// assert_eq!(-1, epoch::absolute_day(GregorianDate::new(2001, 1, 23).unwrap()));
/// ```
pub fn absolute_day(date: GregorianDate) -> i64 {
    days_between(EPOCH, date)
}

/// Signed number of days from `from` to `to`.
///
/// Counts the days in the whole years between the two year numbers, then
/// adjusts by the ordinal day of each date within its own year. The cost does
/// not depend on how far apart the dates are.
pub fn days_between(from: GregorianDate, to: GregorianDate) -> i64 {
    let whole_years = if to.year() >= from.year() {
        sum_year_days(from.year(), to.year())
    } else {
        -sum_year_days(to.year(), from.year())
    };
    whole_years + to.day_of_year() as i64 - from.day_of_year() as i64
}

// Days in every year in [start, end).
fn sum_year_days(start: i32, end: i32) -> i64 {
    365 * (end as i64 - start as i64) + leap_years_before(end) - leap_years_before(start)
}

// Leap years in [0, year).
fn leap_years_before(year: i32) -> i64 {
    let last = year as i64 - 1;
    last.div_floor(&4) - last.div_floor(&100) + last.div_floor(&400) + 1
}

/// Inverse of [`absolute_day`]. Fails with [`Error::OutOfRange`] when the day
/// falls outside years 1 to 9999.
pub fn from_absolute_day(absolute_day: i64) -> Result<GregorianDate, Error> {
    let out_of_range = Error::OutOfRange { absolute_day };
    let gnd = GregorianNormalizedDate::from_day(absolute_day).ok_or(out_of_range)?;
    let (year, month, day) = gnd.to_date();
    let year = i32::try_from(year).map_err(|_| out_of_range)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(out_of_range);
    }
    Ok(GregorianDate::from_parts_unchecked(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(absolute_day(date(2001, 1, 24)), 0);
    }

    #[test]
    fn test_absolute_day() {
        assert_eq!(absolute_day(date(2001, 1, 23)), -1);
        assert_eq!(absolute_day(date(2001, 1, 25)), 1);
        assert_eq!(absolute_day(date(2001, 1, 1)), -23);
        assert_eq!(absolute_day(date(2001, 12, 31)), 341);
        assert_eq!(absolute_day(date(2002, 1, 1)), 342);
        // Lunar new year of 2002 is 384 days after the epoch.
        assert_eq!(absolute_day(date(2002, 2, 12)), 384);
        assert_eq!(absolute_day(date(2000, 1, 1)), -389);
        assert_eq!(absolute_day(date(1, 1, 1)), -730_508);
        assert_eq!(absolute_day(date(9999, 12, 31)), 2_921_550);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2000, 2, 28), date(2000, 3, 1)), 2);
        assert_eq!(days_between(date(1900, 2, 28), date(1900, 3, 1)), 1);
        assert_eq!(days_between(date(2000, 1, 1), date(2001, 1, 1)), 366);
        assert_eq!(days_between(date(2001, 1, 1), date(2000, 1, 1)), -366);
        assert_eq!(days_between(date(2017, 6, 24), date(2017, 6, 24)), 0);
    }

    #[test]
    fn test_sum_year_days_matches_year_lengths() {
        use crate::gregorian::days_in_year;

        let mut total = 0;
        for end in 1..=2401 {
            assert_eq!(sum_year_days(1, end), total, "end {}", end);
            total += days_in_year(end) as i64;
        }
        assert_eq!(sum_year_days(1600, 2000), 146_097);
        assert_eq!(sum_year_days(2001, 2001), 0);
    }

    #[test]
    fn test_days_between_far_apart() {
        assert_eq!(days_between(EPOCH, date(9999, 12, 31)), 2_921_550);
        assert_eq!(days_between(date(9999, 12, 31), EPOCH), -2_921_550);
    }

    #[test]
    fn test_from_absolute_day() {
        assert_eq!(from_absolute_day(0), Ok(EPOCH));
        assert_eq!(from_absolute_day(-1), Ok(date(2001, 1, 23)));
        assert_eq!(from_absolute_day(-389), Ok(date(2000, 1, 1)));
        assert_eq!(from_absolute_day(384), Ok(date(2002, 2, 12)));
        assert_eq!(from_absolute_day(-730_508), Ok(date(1, 1, 1)));
        assert_eq!(from_absolute_day(2_921_550), Ok(date(9999, 12, 31)));
        assert_eq!(
            from_absolute_day(-730_509),
            Err(Error::OutOfRange {
                absolute_day: -730_509
            })
        );
        assert!(from_absolute_day(2_921_551).is_err());
        assert!(from_absolute_day(i64::MAX).is_err());
        assert!(from_absolute_day(i64::MIN).is_err());
    }

    #[test]
    fn test_round_trip_across_leap_days() {
        // Walk every day around two century boundaries, one of them a leap century.
        for start in [date(1899, 12, 1), date(1999, 12, 1)] {
            let first = absolute_day(start);
            for offset in 0..500 {
                let day = first + offset;
                let date = from_absolute_day(day).unwrap();
                assert_eq!(absolute_day(date), day, "{}", date);
            }
        }
    }
}
