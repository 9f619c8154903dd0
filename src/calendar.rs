use std::cmp::{max, min};
use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use tracing::debug;

use crate::epoch::{self, EPOCH};
use crate::lunar::{self, LunarDate};
use crate::tables::LunarTables;
use crate::{Error, GregorianDate};

lazy_static! {
    static ref BUILTIN_CALENDAR: LunarCalendar = LunarCalendar::builder()
        .checked_build()
        .expect("built-in lunar calendar should build");
}

/// Converts Gregorian dates to lunar dates using a set of [`LunarTables`] anchored at an
/// epoch: the Gregorian date on which the first tabulated lunar year begins.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LunarCalendar {
    tables: LunarTables,
    epoch: GregorianDate,
    coverage_start: GregorianDate,
    coverage_end: GregorianDate,
}

impl LunarCalendar {
    pub fn builder() -> LunarCalendarBuilder {
        LunarCalendarBuilder::new()
    }

    /// The calendar for the built-in 2001-2050 tables.
    pub fn builtin() -> &'static LunarCalendar {
        &BUILTIN_CALENDAR
    }

    pub fn tables(&self) -> &LunarTables {
        &self.tables
    }

    pub fn epoch(&self) -> GregorianDate {
        self.epoch
    }

    /// Gregorian dates that [`LunarCalendar::solar_to_lunar`] accepts.
    ///
    /// Date pickers feeding this calendar should be limited to this range.
    ///
    /// ```
    /// use lunisolar::{GregorianDate, LunarCalendar};
    ///
    /// let coverage = LunarCalendar::builtin().coverage();
    /// assert_eq!(*coverage.start(), GregorianDate::new(2001, 1, 24).unwrap());
    /// assert_eq!(*coverage.end(), GregorianDate::new(2050, 12, 31).unwrap());
    /// ```
    pub fn coverage(&self) -> RangeInclusive<GregorianDate> {
        self.coverage_start..=self.coverage_end
    }

    /// Converts a Gregorian date to its lunar equivalent.
    ///
    /// Fails with [`Error::OutOfRange`] if the date's year is not a tabulated year or the date
    /// lies outside the span of the tables.
    #[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
    pub fn solar_to_lunar(&self, date: GregorianDate) -> Result<LunarDate, Error> {
        if self.tables.row_of_year(date.year()).is_none() {
            let absolute_day = epoch::days_between(self.epoch, date);
            debug!(
                absolute_day,
                first_year = self.tables.first_year(),
                last_year = self.tables.last_year(),
                "year outside lunar table coverage"
            );
            return Err(Error::OutOfRange { absolute_day });
        }
        lunar::resolve(&self.tables, epoch::days_between(self.epoch, date))
    }

    /// The Gregorian date of the first day of lunar `year`.
    ///
    /// ```
    /// use lunisolar::{GregorianDate, LunarCalendar};
    ///
    /// let new_year = LunarCalendar::builtin().lunar_new_year(2024).unwrap();
    /// assert_eq!(new_year, GregorianDate::new(2024, 2, 10).unwrap());
    /// ```
    pub fn lunar_new_year(&self, year: i32) -> Result<GregorianDate, Error> {
        let row = self
            .tables
            .row_of_year(year)
            .ok_or(Error::YearNotTabulated { year })?;
        let offset = self
            .tables
            .days_before_row(row)
            .ok_or(Error::YearNotTabulated { year })?;
        self.epoch.checked_add_days(offset as i64)
    }
}

impl Default for LunarCalendar {
    fn default() -> Self {
        *LunarCalendar::builtin()
    }
}

#[derive(Default)]
pub struct LunarCalendarBuilder {
    tables: Option<LunarTables>,
    epoch: Option<GregorianDate>,
}

impl LunarCalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables to convert with. Defaults to [`LunarTables::builtin`].
    pub fn tables(&mut self, tables: LunarTables) -> &mut Self {
        self.tables = Some(tables);
        self
    }

    /// Gregorian date of lunar new year in the first tabulated year. Defaults to
    /// [`epoch::EPOCH`].
    pub fn epoch(&mut self, epoch: GregorianDate) -> &mut Self {
        self.epoch = Some(epoch);
        self
    }

    pub fn build(&self) -> LunarCalendar {
        match self.checked_build() {
            Ok(calendar) => calendar,
            Err(e) => panic!("{:?}", e),
        }
    }

    pub fn checked_build(&self) -> Result<LunarCalendar, Error> {
        let tables = match self.tables {
            Some(tables) => tables,
            None => *LunarTables::builtin(),
        };
        let epoch = self.epoch.unwrap_or(EPOCH);

        // Accepted dates must lie in a tabulated year and within the days the tables span.
        let first_day = GregorianDate::new(tables.first_year(), 1, 1)?;
        let last_day = GregorianDate::new(tables.last_year(), 12, 31)?;
        let table_end = epoch.checked_add_days(tables.total_days() as i64 - 1)?;
        let coverage_start = max(epoch, first_day);
        let coverage_end = min(table_end, last_day);
        if coverage_start > coverage_end {
            return Err(Error::OutOfRange {
                absolute_day: epoch::days_between(epoch, coverage_start),
            });
        }

        Ok(LunarCalendar {
            tables,
            epoch,
            coverage_start,
            coverage_end,
        })
    }
}
