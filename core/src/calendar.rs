//! Calendar date/time conversions using O(1) algorithms
//!
//! Implements Howard Hinnant's civil_from_days and days_from_civil algorithms.
//! Reference: http://howardhinnant.github.io/date_algorithms.html
//!
//! These algorithms are used in C++20's `<chrono>` library and provide:
//! - O(1) time complexity (no year iteration)
//! - Correct handling of leap years
//! - Valid for all dates in the proleptic Gregorian calendar

const SECONDS_PER_DAY: i64 = 86_400;

/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT_DAYS: i64 = 719_468;

/// Days in a 400-year era
const DAYS_PER_ERA: i64 = 146_097;

/// Weekday index of 1970-01-01 (Thursday, Sunday = 0)
const EPOCH_WEEKDAY: i64 = 4;

/// Broken-down local time, in the same ranges as C's `struct tm`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// [0, 59]
    pub second: u8,
    /// [0, 59]
    pub minute: u8,
    /// [0, 23]
    pub hour: u8,
    /// Day of month [1, 31]
    pub day: u8,
    /// Zero-based month index [0, 11], January = 0
    pub month: u8,
    /// Full year, e.g. 2024
    pub year: i32,
    /// [0, 6], Sunday = 0
    pub weekday: u8,
    /// Day of year [0, 365], January 1st = 0
    pub year_day: u16,
}

impl LocalTime {
    /// Break down `unix_secs` shifted by `utc_offset_secs` into calendar fields.
    pub fn from_unix(unix_secs: i64, utc_offset_secs: i32) -> Self {
        let local = unix_secs.saturating_add(utc_offset_secs as i64);

        let days = local.div_euclid(SECONDS_PER_DAY);
        let secs_today = local.rem_euclid(SECONDS_PER_DAY);

        let (year, month, day) = civil_from_days(days);
        let year_day = days - days_from_civil(year, 1, 1);

        Self {
            second: (secs_today % 60) as u8,
            minute: ((secs_today % 3600) / 60) as u8,
            hour: (secs_today / 3600) as u8,
            day,
            month: month - 1,
            year: clamp_year(year),
            weekday: (days + EPOCH_WEEKDAY).rem_euclid(7) as u8,
            year_day: year_day as u16,
        }
    }

    /// Years since 1900, as C's `tm_year` reports them
    pub const fn years_since_1900(&self) -> i32 {
        self.year.saturating_sub(1900)
    }
}

fn clamp_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Check if year is a leap year (Gregorian calendar)
///
/// - Divisible by 4: leap year
/// - EXCEPT divisible by 100: not a leap year
/// - EXCEPT divisible by 400: leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Convert days since Unix epoch to civil date (year, month [1, 12], day [1, 31])
fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    // Shift epoch to 0000-03-01 so the leap day lands at the end of the year
    let z = days_since_epoch + EPOCH_SHIFT_DAYS;

    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // day of era [0, 146096]

    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;

    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]

    // Month [0, 11] where 0 = March, 11 = February
    let mp = (5 * doy + 2) / 153;

    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;

    // January and February belong to the next civil year
    let year = if m <= 2 { y + 1 } else { y };

    (year, m, d)
}

/// Convert civil date (year, month [1, 12], day [1, 31]) to days since Unix epoch
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let d = day as i64;

    // March = month 0, February = month 11
    let (y, m) = if m <= 2 { (year - 1, m + 9) } else { (year, m - 3) };

    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * m + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * DAYS_PER_ERA + doe - EPOCH_SHIFT_DAYS
}
