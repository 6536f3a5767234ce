mod consts;
mod convert;
mod prelude;
mod sync;
mod types;

pub use consts::*;
pub use convert::{from_offset, to_offset, to_offset_ymd, ConvertError, DateOrdinalConverter, ISeriesOffset};
pub use sync::{DateSync, Input};
pub use types::{Day, Month, MonthBase, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use chrono::Datelike;
use types::{ordinal_to_ymd, ymd_to_ordinal};

/// A proleptic Gregorian calendar date between 0001-01-01 and 9999-12-31.
///
/// Every value is a real calendar day: the components are validated on
/// construction, so ordinal arithmetic on it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// 0001-01-01
pub const MIN_DATE: CalendarDate = CalendarDate::from_const(MIN_YEAR, JANUARY, MIN_DAY);
/// 9999-12-31
pub const MAX_DATE: CalendarDate = CalendarDate::from_const(MAX_YEAR, DECEMBER, 31);
/// The date every iSeries offset is counted from
pub const EPOCH: CalendarDate = CalendarDate::from_const(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid month base: {_0} (must be 0 or 1)")]
    InvalidMonthBase(u8),
}

impl std::error::Error for DateError {}

/// Textual layout used when rendering a date for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    #[default]
    Iso,
    /// `MM/DD/YYYY`
    Us,
}

impl CalendarDate {
    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        Self::from_ymd(year.get(), month.get(), day.get())
    }

    /// Creates a date from a raw `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_typed,
            month: month_typed,
            day:   day_typed,
        })
    }

    /// Builds a date from components known to be valid at compile time
    const fn from_const(year: u16, month: u8, day: u8) -> Self {
        Self {
            year:  Year::from_const(year),
            month: Month::from_const(month),
            day:   Day::from_const(day),
        }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the validated `Year`
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the validated `Month`
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the validated `Day`
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the date as a plain `(year, month, day)` tuple
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Day number counted from 0001-01-01, which is day 1.
    pub const fn to_ordinal(&self) -> i32 {
        ymd_to_ordinal(self.year(), self.month(), self.day())
    }

    /// Inverse of [`CalendarDate::to_ordinal`].
    /// Returns `None` outside `MIN_ORDINAL..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return None;
        }
        let (year, month, day) = ordinal_to_ymd(ordinal);
        Self::from_ymd(year, month, day).ok()
    }

    /// The first representable date
    pub const fn min_value() -> Self {
        MIN_DATE
    }

    /// The last representable date
    pub const fn max_value() -> Self {
        MAX_DATE
    }

    /// The iSeries epoch, 1899-11-29
    pub const fn epoch() -> Self {
        EPOCH
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the system clock is outside 1-9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// Renders the date in the requested layout
    pub fn format(&self, style: DateStyle) -> String {
        match style {
            DateStyle::Iso => self.to_string(),
            DateStyle::Us => format!(
                "{:02}{MONTH_FIRST_SEPARATOR}{:02}{MONTH_FIRST_SEPARATOR}{:04}",
                self.month(),
                self.day(),
                self.year()
            ),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order) = if has_hyphen {
            // ISO format: YYYY-MM-DD
            (DATE_SEPARATOR, [0, 1, 2])
        } else if has_slash {
            // Month-first format: MM/DD/YYYY
            (MONTH_FIRST_SEPARATOR, [2, 0, 1])
        } else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        let [year_at, month_at, day_at] = order;
        let year = parse_component::<u16>(parts[year_at])?;
        let month = parse_component::<u8>(parts[month_at])?;
        let day = parse_component::<u8>(parts[day_at])?;

        Self::from_ymd(year, month, day)
    }
}

/// Parses one numeric date component; anything that is not a plain
/// non-negative number is a format error
fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = DateError;

    // chrono months and days are already 1-based and fit in a u8
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| DateError::InvalidYear(0))?;
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_ymd()
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
