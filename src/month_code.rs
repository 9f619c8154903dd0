//! Month-type codes used in the lunar month table.
//!
//! Each slot of a table row holds one code. Codes 0 and 1 are ordinary months of 29 and 30
//! days. Codes 2 to 5 are merged slots: an ordinary month followed by the leap month inserted
//! after it, stored as one combined length plus the day at which the leap month begins.

use crate::Error;

/// Decoded length of a month slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MonthSpan {
    /// Days covered by the slot, including an inserted leap month.
    pub total_days: u8,
    /// Day offset within the slot at which the leap month begins, or 0 if there is none.
    pub leap_boundary: u8,
}

impl MonthSpan {
    const fn new(total_days: u8, leap_boundary: u8) -> Self {
        MonthSpan {
            total_days,
            leap_boundary,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.leap_boundary > 0
    }
}

const MONTH_SPANS: [MonthSpan; 6] = [
    MonthSpan::new(29, 0),
    MonthSpan::new(30, 0),
    MonthSpan::new(58, 29),
    MonthSpan::new(59, 30),
    MonthSpan::new(59, 30),
    MonthSpan::new(60, 30),
];

/// Decodes a month-type code, failing with [`Error::InvalidTableCode`] for codes outside 0-5.
///
/// ```
/// use lunisolar::month_code::decode;
///
/// let span = decode(2).unwrap();
/// assert_eq!((58, 29), (span.total_days, span.leap_boundary));
/// assert!(decode(6).is_err());
/// ```
pub fn decode(code: u8) -> Result<MonthSpan, Error> {
    MONTH_SPANS
        .get(code as usize)
        .copied()
        .ok_or(Error::InvalidTableCode { code })
}
