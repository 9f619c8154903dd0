//! Conversion from Gregorian (solar) dates to the East-Asian lunar calendar.
//!
//! Conversion is driven by precomputed tables covering lunar years 2001 to 2050. Gregorian
//! 2001-01-24 is lunar 2001-01-01 and serves as the epoch for all day counts.
//!
//! ```
//! use lunisolar::convert_solar_to_lunar;
//!
//! let lunar = convert_solar_to_lunar(2024, 2, 10).unwrap();
//! let (year, month, day): (i32, u8, u8) = lunar.into();
//! assert_eq!((2024, 1, 1), (year, month, day));
//!
//! assert!(convert_solar_to_lunar(2051, 1, 1).is_err());
//! ```
//!
//! Leap months are not distinguished from the ordinary month they follow: both are reported
//! under the same month number.

pub use calendar::{LunarCalendar, LunarCalendarBuilder};
pub use error::Error;
pub use gregorian::{days_in_month, days_in_year, is_leap_year, GregorianDate};
pub use lunar::LunarDate;
pub use tables::LunarTables;

mod calendar;
mod div_rem;
pub mod epoch;
mod error;
mod gregorian;
mod gregorian_normalized_date;
pub mod lunar;
pub mod month_code;
pub mod tables;

/// Converts a Gregorian date to a lunar date using the built-in tables.
///
/// Fails with [`Error::InvalidDate`] if the date does not exist, and with
/// [`Error::OutOfRange`] if it falls outside 2001-01-24 to 2050-12-31.
pub fn convert_solar_to_lunar(year: i32, month: u8, day: u8) -> Result<LunarDate, Error> {
    let date = GregorianDate::new(year, month, day)?;
    LunarCalendar::builtin().solar_to_lunar(date)
}
