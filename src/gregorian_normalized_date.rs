// The gregorian calendar works in cycles of 400 years. Each cycle has 97 leap years and 303
// normal years, so 97*366 + 303*365 = 146097 days. Absolute days are counted from the lunar
// epoch (2001-01-24), which is not aligned with any cycle, so we shift them onto a zero point
// that is.
//
// Having the leap day at the end of each period means we can let it come out naturally as an
// "overflow" in the last period instead of special-casing it. So we pick 2000-03-01 as zero
// point, right after the last leap day of the preceding cycle, and let each "year" run from
// March 1 to the end of February:
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29
//
// The quadrennium then ends with its leap year, and the cycle ends with the "leap century".

use num_integer::Integer;

use crate::div_rem::ClampedDivRem;

pub(crate) struct GregorianNormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i64,
    // Number of centuries since the start of the cycle (0-3)
    century: u8,
    // Number of quadrennia (4-year periods) since the start of the century (0-24).
    quadrennium: u8,
    // Number of years since the start of the quadrennium (0-3).
    year: u8,
    // Number of days since the start of the year (0-365, where the year starts March 1).
    day: u16,
}

const GREGORIAN_CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
#[allow(clippy::identity_op)]
const GREGORIAN_QUADRENNIUM_DAYS: u16 = 3 * 365 + 1 * 366;
const GREGORIAN_YEAR_DAYS: u16 = 365;

const GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS: i64 = 329; // 329 days from 2000-03-01 to 2001-01-24
const GREGORIAN_MONTH_STARTS: [u16; 13] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, u16::MAX]; // Index 0 = March

fn month_from_day_offset(day: u16) -> u8 {
    let mut month = (day / 30) as u8;
    if day < GREGORIAN_MONTH_STARTS[month as usize] {
        // We have overshot the month. Move back.
        month -= 1;
    }
    month
}

impl GregorianNormalizedDate {
    /// Splits an absolute day (days since the lunar epoch) into cycle, century, quadrennium,
    /// year and day. Returns `None` only if shifting onto the zero point overflows.
    pub(crate) fn from_day(absolute_day: i64) -> Option<Self> {
        let day = absolute_day.checked_add(GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS)?;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(GREGORIAN_CYCLE_DAYS as i64));
        let days_into_cycle = days_into_cycle as u32; // 2^18 days per cycle

        // The first three centuries of each cycle are normal centuries with 24 leap years and
        // 76 normal years. The fourth is a leap century with one extra leap day at the end.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_DAYS as u32, 3_u8);
        let days_into_century = days_into_century as u16; // 2^16 days per century

        // The last quadrennium of a normal century lacks its leap day, so it is one day short
        // and a plain division is enough here.
        let (quadrennium, days_into_quadrennium) =
            days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);
        let quadrennium = quadrennium as u8;

        let (years_into_quadrennium, days_into_year) =
            days_into_quadrennium.clamped_div_rem(GREGORIAN_YEAR_DAYS, 3_u8);

        Some(GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium,
            day: days_into_year,
        })
    }

    pub(crate) fn to_date(&self) -> (i64, u8, u8) {
        let mut year = 2000
            + 400 * self.cycle
            + 100 * self.century as i64
            + 4 * self.quadrennium as i64
            + self.year as i64;

        // NB: shifted so march is first.
        let mut month = month_from_day_offset(self.day);
        let days_into_month = (self.day - GREGORIAN_MONTH_STARTS[month as usize]) as u8;

        // Move back to January-based months, carrying January and February into the next year.
        month += 2;
        if month >= 12 {
            month -= 12;
            year += 1;
        }
        (year, month + 1, days_into_month + 1)
    }
}
