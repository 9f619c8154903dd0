use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// The absolute day is not covered by the lunar tables, or a date computed from it would
    /// fall outside the supported Gregorian years.
    #[error("absolute day {absolute_day} is out of range")]
    OutOfRange { absolute_day: i64 },

    /// A month-type code outside the known set was read from a table. This is a defect in the
    /// table data, not in the caller's input.
    #[error("invalid month-type code {code} in lunar table")]
    InvalidTableCode { code: u8 },

    #[error("lunar table row {row} has months summing to {actual} days, but year length is {expected}")]
    TableMismatch { row: usize, expected: u16, actual: u32 },

    #[error("lunar tables have {years} year lengths but {rows} month rows")]
    TableShape { years: usize, rows: usize },

    /// The years a table set describes would run outside the supported Gregorian years.
    #[error("lunar tables starting at year {first_year} with {years} rows exceed the supported years")]
    TableYears { first_year: i32, years: usize },

    #[error("lunar year {year} is not covered by the tables")]
    YearNotTabulated { year: i32 },
}
