use std::fmt;

use tracing::debug;

use crate::month_code::decode;
use crate::tables::LunarTables;
use crate::Error;

/// A date in the lunar calendar.
///
/// `month` is the table slot (1-12). A date in a leap month is reported under the number of
/// the ordinary month it follows, with `day` counted from the start of the leap month, so two
/// different lunar months can share one month number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl LunarDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl From<LunarDate> for (i32, u8, u8) {
    fn from(date: LunarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Resolves an absolute day (days since the first day of the first tabulated lunar year) into
/// a lunar date.
///
/// Fails with [`Error::OutOfRange`] unless `0 <= absolute_day < tables.total_days()`.
#[tracing::instrument(level = "trace", skip(tables))]
pub fn resolve(tables: &LunarTables, absolute_day: i64) -> Result<LunarDate, Error> {
    let out_of_range = Error::OutOfRange { absolute_day };
    if absolute_day < 0 || absolute_day >= tables.total_days() as i64 {
        debug!(
            absolute_day,
            total_days = tables.total_days(),
            "absolute day outside lunar table coverage"
        );
        return Err(out_of_range);
    }
    let mut remaining = absolute_day as u32;

    let mut row = 0;
    loop {
        let year_days = tables.year_days(row).ok_or(out_of_range)? as u32;
        if remaining < year_days {
            break;
        }
        remaining -= year_days;
        row += 1;
    }

    let mut slot = 0;
    let span = loop {
        let code = tables.month_code(row, slot).ok_or(out_of_range)?;
        let span = decode(code)?;
        if remaining < span.total_days as u32 {
            break span;
        }
        remaining -= span.total_days as u32;
        slot += 1;
    };

    // Re-base days in the leap half of a merged slot onto the leap month's own numbering.
    if span.is_merged() && remaining >= span.leap_boundary as u32 {
        remaining -= span.leap_boundary as u32;
    }

    Ok(LunarDate {
        year: tables.first_year() + row as i32,
        month: slot as u8 + 1,
        day: remaining as u8 + 1,
    })
}
