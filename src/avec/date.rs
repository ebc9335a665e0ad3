//! Dates stored in library and structure headers.

use core::fmt;

/// A date and time, as stored in `BGNLIB` and `BGNSTR` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: i16,
    pub day: i16,
    pub hour: i16,
    pub minute: i16,
    pub second: i16,
}

impl Timestamp {
    /// Build a timestamp from year, month, day, hour, minute and second
    /// fields, in stream order.
    ///
    /// Years before 1900 are taken as two-digit years: those above 60 are
    /// placed in the 1900s, the remainder in the 2000s.
    pub fn from_fields([year, month, day, hour, minute, second]: [i16; 6]) -> Self {
        let mut year = i32::from(year);
        if year < 1900 {
            year += if year > 60 { 1900 } else { 2000 };
        }

        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
