use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS,
    DAYS_PER_YEAR, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_ORDINAL,
    MAX_YEAR, MIN_ORDINAL,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(v) if value <= MAX_YEAR => Self(v),
            _ => panic!("year out of range"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 29th of February
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) if value <= MAX_MONTH => Self(v),
            _ => panic!("month out of range"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("day must be non-zero"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context here, so only the longest month applies
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= DAYS_IN_MONTH[DECEMBER as usize] => Ok(Self(non_zero)),
            _ => Err(DateError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an external calendar widget numbers its months.
///
/// GTK-style calendars report January as `0`; everything inside this crate
/// uses `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MonthBase {
    /// January is 0
    Zero,
    /// January is 1
    #[default]
    One,
}

impl MonthBase {
    /// Converts a widget month into a validated `Month`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the shifted value is not a month.
    pub fn to_month(self, widget_month: u8) -> Result<Month, DateError> {
        match self {
            Self::One => Month::new(widget_month),
            Self::Zero => {
                let shifted = widget_month
                    .checked_add(1)
                    .ok_or(DateError::InvalidMonth(widget_month))?;
                Month::new(shifted).map_err(|_| DateError::InvalidMonth(widget_month))
            }
        }
    }

    /// Converts a `Month` into the widget's numbering
    pub const fn from_month(self, month: Month) -> u8 {
        match self {
            Self::One => month.get(),
            Self::Zero => month.get() - 1,
        }
    }
}

impl TryFrom<u8> for MonthBase {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(DateError::InvalidMonthBase(other)),
        }
    }
}

impl From<MonthBase> for u8 {
    fn from(base: MonthBase) -> Self {
        match base {
            MonthBase::Zero => 0,
            MonthBase::One => 1,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in all years before `year`, counting from 0001-01-01
const fn days_before_year(year: u16) -> i32 {
    let y = year as i32 - 1;
    y * DAYS_PER_YEAR + y / 4 - y / 100 + y / 400
}

/// Days in `year` before the first of `month`
const fn days_before_month(year: u16, month: u8) -> i32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let leap_shift = if month > FEBRUARY && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[month as usize] as i32 + leap_shift
}

/// Ordinal day number of an already validated date, with 0001-01-01 as day 1
pub(crate) const fn ymd_to_ordinal(year: u16, month: u8, day: u8) -> i32 {
    days_before_year(year) + days_before_month(year, month) + day as i32
}

/// Inverse of [`ymd_to_ordinal`]. The caller guarantees `MIN_ORDINAL..=MAX_ORDINAL`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn ordinal_to_ymd(ordinal: i32) -> (u16, u8, u8) {
    debug_assert!(ordinal >= MIN_ORDINAL && ordinal <= MAX_ORDINAL);

    let n = ordinal - 1;
    let n400 = n / DAYS_PER_400_YEARS;
    let n = n % DAYS_PER_400_YEARS;
    let n100 = n / DAYS_PER_100_YEARS;
    let n = n % DAYS_PER_100_YEARS;
    let n4 = n / DAYS_PER_4_YEARS;
    let n = n % DAYS_PER_4_YEARS;
    let n1 = n / DAYS_PER_YEAR;
    let n = n % DAYS_PER_YEAR;

    let year = (n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1) as u16;
    // Last day of a 4- or 400-year cycle overflows into a fifth year
    if n1 == 4 || n100 == 4 {
        return (year - 1, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]);
    }

    // `n` is now the zero-based day of the year
    let leap = is_leap_year(year);
    let mut month = DECEMBER;
    while days_before_month_in(leap, month) > n {
        month -= 1;
    }
    let day = n - days_before_month_in(leap, month) + 1;
    (year, month, day as u8)
}

const fn days_before_month_in(leap: bool, month: u8) -> i32 {
    let leap_shift = if leap && month > FEBRUARY { 1 } else { 0 };
    DAYS_BEFORE_MONTH[month as usize] as i32 + leap_shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1899).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_is_leap() {
        assert!(Year::new(2000).unwrap().is_leap());
        assert!(!Year::new(1900).unwrap().is_leap());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1899).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1899");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 11.try_into().unwrap();
        assert_eq!(month.get(), 11);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0, 2024, 1), Err(DateError::InvalidDay { .. })));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(DateError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        // Month outside the calendar never yields a day
        assert!(Day::new(1, 2024, 13).is_err());
        assert!(Day::new(1, 2024, 0).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(matches!(result, Err(DateError::InvalidDay { day: 32, .. })));

        let day: Day = 31.try_into().unwrap();
        assert_eq!(day.get(), 31);
    }

    #[test]
    fn test_month_base_conversions() {
        struct TestCase {
            base:   MonthBase,
            widget: u8,
            month:  Option<u8>,
        }

        let cases = [
            TestCase { base: MonthBase::Zero, widget: 0, month: Some(1) },
            TestCase { base: MonthBase::Zero, widget: 10, month: Some(11) },
            TestCase { base: MonthBase::Zero, widget: 11, month: Some(12) },
            TestCase { base: MonthBase::Zero, widget: 12, month: None },
            TestCase { base: MonthBase::Zero, widget: 255, month: None },
            TestCase { base: MonthBase::One, widget: 0, month: None },
            TestCase { base: MonthBase::One, widget: 11, month: Some(11) },
            TestCase { base: MonthBase::One, widget: 13, month: None },
        ];

        for case in &cases {
            let result = case.base.to_month(case.widget);
            match case.month {
                Some(expected) => {
                    let month = result.unwrap();
                    assert_eq!(month.get(), expected, "{:?} widget month {}", case.base, case.widget);
                    assert_eq!(case.base.from_month(month), case.widget);
                },
                None => assert!(
                    matches!(result, Err(DateError::InvalidMonth(m)) if m == case.widget),
                    "{:?} widget month {} should be rejected",
                    case.base,
                    case.widget
                ),
            }
        }
    }

    #[test]
    fn test_month_base_serde() {
        let base: MonthBase = serde_json::from_str("0").unwrap();
        assert_eq!(base, MonthBase::Zero);
        assert_eq!(serde_json::to_string(&MonthBase::One).unwrap(), "1");
        assert!(serde_json::from_str::<MonthBase>("2").is_err());
        assert_eq!(MonthBase::try_from(2), Err(DateError::InvalidMonthBase(2)));
        assert_eq!(
            DateError::InvalidMonthBase(2).to_string(),
            "Invalid month base: 2 (must be 0 or 1)"
        );
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2023, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 1899, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 4, is_leap: true, description: "first leap year" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_before_month_matches_table() {
        for month in 1..DECEMBER {
            assert_eq!(
                days_before_month(2023, month + 1) - days_before_month(2023, month),
                i32::from(days_in_month(2023, month)),
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_before_month(2024, 3), 60);
        assert_eq!(days_before_month(2023, 3), 59);
    }

    #[test]
    fn test_known_ordinals() {
        assert_eq!(ymd_to_ordinal(1, 1, 1), MIN_ORDINAL);
        assert_eq!(ymd_to_ordinal(9999, 12, 31), MAX_ORDINAL);
        assert_eq!(ymd_to_ordinal(1899, 11, 29), 693_563);
        assert_eq!(ymd_to_ordinal(1900, 1, 1), 693_596);
        assert_eq!(ymd_to_ordinal(1970, 1, 1), 719_163);
        assert_eq!(ymd_to_ordinal(2000, 1, 1), 730_120);
    }

    #[test]
    fn test_ordinal_to_ymd_cycle_edges() {
        // Last day of a 400-year cycle and of a 4-year cycle
        assert_eq!(ordinal_to_ymd(ymd_to_ordinal(2000, 12, 31)), (2000, 12, 31));
        assert_eq!(ordinal_to_ymd(ymd_to_ordinal(2004, 12, 31)), (2004, 12, 31));
        assert_eq!(ordinal_to_ymd(ymd_to_ordinal(1900, 12, 31)), (1900, 12, 31));
        assert_eq!(ordinal_to_ymd(ymd_to_ordinal(2024, 2, 29)), (2024, 2, 29));
        assert_eq!(ordinal_to_ymd(ymd_to_ordinal(2024, 3, 1)), (2024, 3, 1));
        assert_eq!(ordinal_to_ymd(MIN_ORDINAL), (1, 1, 1));
        assert_eq!(ordinal_to_ymd(MAX_ORDINAL), (9999, 12, 31));
    }
}
