use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, EPOCH, EPOCH_ORDINAL, MAX_ORDINAL, MIN_ORDINAL, prelude::*};

/// Signed number of days between a date and the converter's epoch.
///
/// Negative offsets fall before the epoch, positive ones after it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Deref, FromStr,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ISeriesOffset(i32);

impl ISeriesOffset {
    /// Wraps a raw day count
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Error type for date/offset conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The `(year, month, day)` triple is not a calendar date.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The offset lands outside 0001-01-01..=9999-12-31.
    #[error("Offset {offset} is out of range (must be {min}..={max})")]
    OutOfRange { offset: i64, min: i32, max: i32 },
}

/// Converts calendar dates to day offsets from a fixed epoch and back.
///
/// The default epoch is 1899-11-29. The epoch ordinal is computed once on
/// construction; every conversion after that is a single addition or
/// subtraction on ordinal day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateOrdinalConverter {
    epoch:         CalendarDate,
    epoch_ordinal: i32,
}

impl Default for DateOrdinalConverter {
    fn default() -> Self {
        Self::ISERIES
    }
}

impl DateOrdinalConverter {
    /// Converter for the standard iSeries epoch
    pub const ISERIES: Self = Self {
        epoch:         EPOCH,
        epoch_ordinal: EPOCH_ORDINAL,
    };

    /// Converter counting days from an arbitrary epoch
    pub const fn new(epoch: CalendarDate) -> Self {
        Self {
            epoch,
            epoch_ordinal: epoch.to_ordinal(),
        }
    }

    pub const fn epoch(&self) -> CalendarDate {
        self.epoch
    }

    pub const fn epoch_ordinal(&self) -> i32 {
        self.epoch_ordinal
    }

    /// Smallest offset that maps to a date (0001-01-01)
    pub const fn min_offset(&self) -> ISeriesOffset {
        ISeriesOffset(MIN_ORDINAL - self.epoch_ordinal)
    }

    /// Largest offset that maps to a date (9999-12-31)
    pub const fn max_offset(&self) -> ISeriesOffset {
        ISeriesOffset(MAX_ORDINAL - self.epoch_ordinal)
    }

    /// Offset of `date` from the epoch. Total over `CalendarDate`.
    pub const fn to_offset(&self, date: CalendarDate) -> ISeriesOffset {
        ISeriesOffset(date.to_ordinal() - self.epoch_ordinal)
    }

    /// Offset of a raw `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDate` if the triple is not a calendar date.
    pub fn to_offset_ymd(&self, year: u16, month: u8, day: u8) -> Result<ISeriesOffset, ConvertError> {
        let date = CalendarDate::from_ymd(year, month, day)?;
        Ok(self.to_offset(date))
    }

    /// Date that lies `offset` days from the epoch.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the date would fall outside
    /// 0001-01-01..=9999-12-31.
    pub fn from_offset(&self, offset: impl Into<ISeriesOffset>) -> Result<CalendarDate, ConvertError> {
        let offset = offset.into();
        self.epoch_ordinal
            .checked_add(offset.get())
            .and_then(CalendarDate::from_ordinal)
            .ok_or_else(|| self.out_of_range(i64::from(offset.get())))
    }

    /// Like [`DateOrdinalConverter::from_offset`] for offsets wider than `i32`,
    /// as typed by a user.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the date would fall outside
    /// 0001-01-01..=9999-12-31.
    pub fn from_offset_i64(&self, offset: i64) -> Result<CalendarDate, ConvertError> {
        let narrow = i32::try_from(offset).map_err(|_| self.out_of_range(offset))?;
        self.from_offset(narrow)
    }

    const fn out_of_range(&self, offset: i64) -> ConvertError {
        ConvertError::OutOfRange {
            offset,
            min: self.min_offset().get(),
            max: self.max_offset().get(),
        }
    }
}

/// Offset of `date` from 1899-11-29.
pub const fn to_offset(date: CalendarDate) -> ISeriesOffset {
    DateOrdinalConverter::ISERIES.to_offset(date)
}

/// Offset of a raw `(year, month, day)` triple from 1899-11-29.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` if the triple is not a calendar date.
pub fn to_offset_ymd(year: u16, month: u8, day: u8) -> Result<ISeriesOffset, ConvertError> {
    DateOrdinalConverter::ISERIES.to_offset_ymd(year, month, day)
}

/// Date that lies `offset` days from 1899-11-29.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if the date would fall outside
/// 0001-01-01..=9999-12-31.
pub fn from_offset(offset: impl Into<ISeriesOffset>) -> Result<CalendarDate, ConvertError> {
    DateOrdinalConverter::ISERIES.from_offset(offset)
}
