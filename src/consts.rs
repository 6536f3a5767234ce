/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap year before the first of each month
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub(crate) const DAYS_PER_YEAR: i32 = 365;
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;

/// Ordinal day number of 0001-01-01
pub const MIN_ORDINAL: i32 = 1;
/// Ordinal day number of 9999-12-31
pub const MAX_ORDINAL: i32 = 3_652_059;

/// Year of the iSeries epoch (1899-11-29)
pub const EPOCH_YEAR: u16 = 1899;
/// Month of the iSeries epoch
pub const EPOCH_MONTH: u8 = 11;
/// Day of the iSeries epoch
pub const EPOCH_DAY: u8 = 29;
/// Ordinal day number of the iSeries epoch
pub const EPOCH_ORDINAL: i32 = 693_563;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
