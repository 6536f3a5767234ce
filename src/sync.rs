use std::str::FromStr;

use tracing::debug;

use crate::{CalendarDate, ConvertError, DateError, DateOrdinalConverter, ISeriesOffset, MonthBase};

/// One user edit: either a calendar selection or a typed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Date(CalendarDate),
    Offset(i64),
}

impl FromStr for Input {
    type Err = DateError;

    /// A bare (optionally signed) integer is an offset, anything else must be a date.
    /// Integers too wide for `i64` saturate, so the converter rejects them as out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let offset = trimmed
                .parse::<i64>()
                .unwrap_or(if negative { i64::MIN } else { i64::MAX });
            return Ok(Self::Offset(offset));
        }
        trimmed.parse().map(Self::Date)
    }
}

impl From<CalendarDate> for Input {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl From<ISeriesOffset> for Input {
    fn from(offset: ISeriesOffset) -> Self {
        Self::Offset(i64::from(offset.get()))
    }
}

/// A selected date and its offset, kept consistent with each other.
///
/// Each edit converts in one direction and replaces both values. A rejected
/// edit leaves the previous pair untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSync {
    converter: DateOrdinalConverter,
    date:      CalendarDate,
    offset:    ISeriesOffset,
}

impl DateSync {
    pub const fn new(converter: DateOrdinalConverter, initial: CalendarDate) -> Self {
        Self {
            converter,
            date: initial,
            offset: converter.to_offset(initial),
        }
    }

    /// Starts on today's local date, the way the converter window opens.
    ///
    /// # Errors
    /// Returns the `DateError` of a system clock outside the supported years.
    pub fn today(converter: DateOrdinalConverter) -> Result<Self, DateError> {
        CalendarDate::today().map(|date| Self::new(converter, date))
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn offset(&self) -> ISeriesOffset {
        self.offset
    }

    pub const fn converter(&self) -> &DateOrdinalConverter {
        &self.converter
    }

    /// Calendar selection changed
    pub fn select_date(&mut self, date: CalendarDate) -> ISeriesOffset {
        self.date = date;
        self.offset = self.converter.to_offset(date);
        self.offset
    }

    /// Calendar selection changed, reported as raw widget values.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDate` and keeps the current pair if the
    /// triple is not a calendar date.
    pub fn select_ymd(
        &mut self,
        year: u16,
        widget_month: u8,
        day: u8,
        base: MonthBase,
    ) -> Result<ISeriesOffset, ConvertError> {
        let parsed = base
            .to_month(widget_month)
            .and_then(|month| CalendarDate::from_ymd(year, month.get(), day));
        match parsed {
            Ok(date) => Ok(self.select_date(date)),
            Err(e) => {
                debug!(year, widget_month, day, error = %e, "rejected calendar selection");
                Err(e.into())
            },
        }
    }

    /// Offset spinner changed.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` and keeps the current pair if the
    /// offset maps outside the supported calendar.
    pub fn set_offset(&mut self, offset: i64) -> Result<CalendarDate, ConvertError> {
        match self.converter.from_offset_i64(offset) {
            Ok(date) => {
                self.date = date;
                self.offset = self.converter.to_offset(date);
                Ok(date)
            },
            Err(e) => {
                debug!(offset, error = %e, "rejected offset");
                Err(e)
            },
        }
    }

    /// Routes one edit to the matching setter.
    ///
    /// # Errors
    /// Propagates the `ConvertError` of a rejected offset.
    pub fn apply(&mut self, input: impl Into<Input>) -> Result<(), ConvertError> {
        match input.into() {
            Input::Date(date) => {
                self.select_date(date);
                Ok(())
            },
            Input::Offset(offset) => self.set_offset(offset).map(|_| ()),
        }
    }
}
