//! Precomputed lunar calendar data for lunar years 2001 to 2050.
//!
//! Row `i` of both tables describes lunar year `2001 + i`. The data is astronomical and is not
//! derived here; covering more years means appending rows, which [`LunarTables::new`] checks
//! for consistency.

use lazy_static::lazy_static;
use tracing::warn;

use crate::gregorian::{MAX_YEAR, MIN_YEAR};
use crate::month_code::decode;
use crate::Error;

/// Lunar year described by row 0 of the built-in tables.
pub const FIRST_YEAR: i32 = 2001;

/// Total number of days in each lunar year. Years of 383 days or more contain a leap month.
pub static LUNAR_YEAR_DAYS: [u16; 50] = [
    384, 354, 355, 384, 354, 385, 354, 354, 384, 354, // 2001-2010
    354, 384, 355, 384, 355, 354, 384, 354, 354, 384, // 2011-2020
    354, 355, 384, 354, 384, 355, 354, 383, 355, 354, // 2021-2030
    384, 355, 384, 354, 354, 384, 354, 354, 384, 355, // 2031-2040
    355, 384, 354, 384, 354, 354, 384, 353, 355, 384, // 2041-2050
];

/// Month-type codes (see [`crate::month_code`]) for the twelve slots of each lunar year.
pub static LUNAR_MONTH_CODES: [[u8; 12]; 50] = [
    // 2001-2010
    [1, 1, 1, 2, 1, 0, 0, 1, 0, 1, 0, 1],
    [1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0],
    [1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1],
    [0, 4, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0],
    [1, 0, 1, 0, 1, 0, 4, 1, 1, 0, 1, 1],
    [0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1],
    [1, 1, 0, 0, 4, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1],
    // 2011-2020
    [1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0],
    [1, 0, 5, 1, 0, 1, 0, 0, 1, 0, 1, 0],
    [1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0, 1, 0, 1, 4, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1],
    [0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 1, 2, 1, 0, 1, 0, 1, 1, 1],
    [0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 4, 1, 0, 0, 1, 0, 1, 0, 1],
    // 2021-2030
    [0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1],
    [0, 4, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0],
    [1, 0, 1, 0, 0, 4, 1, 0, 1, 1, 1, 0],
    [1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1],
    [0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1],
    [0, 1, 1, 0, 4, 0, 1, 0, 0, 1, 1, 0],
    [1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 1],
    [0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0],
    // 2031-2040
    [1, 0, 4, 1, 0, 1, 1, 0, 1, 0, 1, 0],
    [1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 4, 1, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0],
    [1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1],
    [1, 1, 0, 1, 0, 3, 0, 0, 1, 0, 1, 1],
    [1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0],
    [1, 1, 0, 1, 4, 1, 0, 1, 0, 1, 0, 0],
    [1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0],
    // 2041-2050
    [1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [0, 4, 0, 1, 0, 1, 0, 1, 1, 0, 1, 1],
    [0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1],
    [1, 0, 1, 0, 0, 1, 2, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1],
    [1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 3, 0, 1, 0, 0, 1, 0, 1],
    [0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0],
    [1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0],
    [1, 0, 3, 0, 1, 0, 1, 1, 0, 1, 1, 0],
];

lazy_static! {
    static ref BUILTIN_TABLES: LunarTables =
        LunarTables::new(FIRST_YEAR, &LUNAR_YEAR_DAYS, &LUNAR_MONTH_CODES)
            .expect("built-in lunar tables should be consistent");
}

/// A checked, read-only view of a year-length table and its month-code table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LunarTables {
    first_year: i32,
    year_days: &'static [u16],
    month_codes: &'static [[u8; 12]],
    total_days: u32,
}

impl LunarTables {
    /// Checks that both tables have the same, non-zero number of rows, that every code decodes
    /// and that the month lengths of each row add up to its year length. Every described year
    /// must lie within the supported Gregorian years (1 to 9999).
    ///
    /// The tables are borrowed for `'static`, so rows loaded at runtime have to be leaked or
    /// otherwise given a static lifetime by the caller.
    pub fn new(
        first_year: i32,
        year_days: &'static [u16],
        month_codes: &'static [[u8; 12]],
    ) -> Result<Self, Error> {
        if year_days.is_empty() || year_days.len() != month_codes.len() {
            warn!(
                years = year_days.len(),
                rows = month_codes.len(),
                "lunar tables have mismatched shapes"
            );
            return Err(Error::TableShape {
                years: year_days.len(),
                rows: month_codes.len(),
            });
        }

        let last_year = i32::try_from(year_days.len() - 1)
            .ok()
            .and_then(|offset| first_year.checked_add(offset));
        match last_year {
            Some(last_year) if first_year >= MIN_YEAR && last_year <= MAX_YEAR => {}
            _ => {
                warn!(
                    first_year,
                    years = year_days.len(),
                    "lunar tables run outside the supported years"
                );
                return Err(Error::TableYears {
                    first_year,
                    years: year_days.len(),
                });
            }
        }

        for (row, (&expected, codes)) in year_days.iter().zip(month_codes).enumerate() {
            let mut actual = 0_u32;
            for (slot, &code) in codes.iter().enumerate() {
                let span = decode(code).map_err(|e| {
                    warn!(row, slot, code, "unknown month-type code in lunar table");
                    e
                })?;
                actual += span.total_days as u32;
            }
            if actual != expected as u32 {
                warn!(row, expected, actual, "lunar table row does not add up");
                return Err(Error::TableMismatch {
                    row,
                    expected,
                    actual,
                });
            }
        }

        Ok(LunarTables {
            first_year,
            year_days,
            month_codes,
            total_days: year_days.iter().map(|&days| days as u32).sum(),
        })
    }

    /// The built-in tables for lunar years 2001 to 2050.
    pub fn builtin() -> &'static LunarTables {
        &BUILTIN_TABLES
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + self.year_days.len() as i32 - 1
    }

    pub fn year_count(&self) -> usize {
        self.year_days.len()
    }

    /// Sum of all year lengths; valid absolute days are `0..total_days`.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn year_days(&self, row: usize) -> Option<u16> {
        self.year_days.get(row).copied()
    }

    pub fn month_code(&self, row: usize, slot: usize) -> Option<u8> {
        self.month_codes.get(row)?.get(slot).copied()
    }

    pub fn row_of_year(&self, year: i32) -> Option<usize> {
        let row = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        (row < self.year_days.len()).then_some(row)
    }

    /// Days from the start of the first row to the start of `row`.
    pub fn days_before_row(&self, row: usize) -> Option<u32> {
        let preceding = self.year_days.get(..row)?;
        Some(preceding.iter().map(|&days| days as u32).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        let tables = LunarTables::builtin();
        assert_eq!(tables.first_year(), 2001);
        assert_eq!(tables.last_year(), 2050);
        assert_eq!(tables.year_count(), 50);
        assert_eq!(tables.total_days(), 18_279);
    }

    #[test]
    fn test_every_row_adds_up() {
        for (row, codes) in LUNAR_MONTH_CODES.iter().enumerate() {
            let total: u32 = codes
                .iter()
                .map(|&code| decode(code).unwrap().total_days as u32)
                .sum();
            assert_eq!(total, LUNAR_YEAR_DAYS[row] as u32, "row {}", row);
        }
    }

    #[test]
    fn test_leap_years_have_one_merged_slot() {
        for (row, codes) in LUNAR_MONTH_CODES.iter().enumerate() {
            let merged = codes
                .iter()
                .filter(|&&code| decode(code).unwrap().is_merged())
                .count();
            let expected = if LUNAR_YEAR_DAYS[row] >= 383 { 1 } else { 0 };
            assert_eq!(merged, expected, "row {}", row);
        }
    }

    #[test]
    fn test_year_lengths_in_observed_range() {
        for days in LUNAR_YEAR_DAYS {
            assert!((353..=385).contains(&days));
        }
    }

    #[test]
    fn test_accessors_are_bounds_checked() {
        let tables = LunarTables::builtin();
        assert_eq!(tables.year_days(0), Some(384));
        assert_eq!(tables.year_days(49), Some(384));
        assert_eq!(tables.year_days(50), None);
        assert_eq!(tables.month_code(0, 3), Some(2));
        assert_eq!(tables.month_code(0, 12), None);
        assert_eq!(tables.month_code(50, 0), None);
    }

    #[test]
    fn test_row_of_year() {
        let tables = LunarTables::builtin();
        assert_eq!(tables.row_of_year(2001), Some(0));
        assert_eq!(tables.row_of_year(2050), Some(49));
        assert_eq!(tables.row_of_year(2000), None);
        assert_eq!(tables.row_of_year(2051), None);
        assert_eq!(tables.row_of_year(i32::MIN), None);
    }

    #[test]
    fn test_days_before_row() {
        let tables = LunarTables::builtin();
        assert_eq!(tables.days_before_row(0), Some(0));
        assert_eq!(tables.days_before_row(1), Some(384));
        assert_eq!(tables.days_before_row(2), Some(384 + 354));
        assert_eq!(tables.days_before_row(50), Some(18_279));
        assert_eq!(tables.days_before_row(51), None);
    }

    static SHORT_YEAR: [u16; 1] = [354];
    static TWO_YEARS: [u16; 2] = [354, 354];
    static ORDINARY_ROW: [[u8; 12]; 1] = [[1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]];
    static TWO_ORDINARY_ROWS: [[u8; 12]; 2] = [
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    ];
    static BAD_CODE_ROW: [[u8; 12]; 1] = [[1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 7]];
    static LONG_ROW: [[u8; 12]; 1] = [[1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]];

    #[test]
    fn test_custom_tables() {
        let tables = LunarTables::new(1990, &SHORT_YEAR, &ORDINARY_ROW).unwrap();
        assert_eq!(tables.first_year(), 1990);
        assert_eq!(tables.last_year(), 1990);
        assert_eq!(tables.total_days(), 354);
    }

    #[test]
    fn test_rejects_years_outside_supported_range() {
        assert_eq!(
            LunarTables::new(i32::MAX, &SHORT_YEAR, &ORDINARY_ROW),
            Err(Error::TableYears {
                first_year: i32::MAX,
                years: 1
            })
        );
        assert_eq!(
            LunarTables::new(9999, &TWO_YEARS, &TWO_ORDINARY_ROWS),
            Err(Error::TableYears {
                first_year: 9999,
                years: 2
            })
        );
        assert_eq!(
            LunarTables::new(0, &SHORT_YEAR, &ORDINARY_ROW),
            Err(Error::TableYears {
                first_year: 0,
                years: 1
            })
        );
        assert_eq!(
            LunarTables::new(i32::MIN, &SHORT_YEAR, &ORDINARY_ROW),
            Err(Error::TableYears {
                first_year: i32::MIN,
                years: 1
            })
        );

        let last = LunarTables::new(9998, &TWO_YEARS, &TWO_ORDINARY_ROWS).unwrap();
        assert_eq!(last.last_year(), 9999);
        assert_eq!(
            crate::lunar::resolve(&last, 354).map(Into::into),
            Ok((9999_i32, 1_u8, 1_u8))
        );
    }

    #[test]
    fn test_rejects_inconsistent_tables() {
        assert_eq!(
            LunarTables::new(2001, &TWO_YEARS, &ORDINARY_ROW),
            Err(Error::TableShape { years: 2, rows: 1 })
        );
        assert_eq!(
            LunarTables::new(2001, &[], &[]),
            Err(Error::TableShape { years: 0, rows: 0 })
        );
        assert_eq!(
            LunarTables::new(2001, &SHORT_YEAR, &BAD_CODE_ROW),
            Err(Error::InvalidTableCode { code: 7 })
        );
        assert_eq!(
            LunarTables::new(2001, &SHORT_YEAR, &LONG_ROW),
            Err(Error::TableMismatch {
                row: 0,
                expected: 354,
                actual: 355
            })
        );
    }
}
