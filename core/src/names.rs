//! Month and weekday names, and 12-hour conversion
//!
//! The short forms are display strings, not codes: May is never abbreviated
//! and Tuesday/Thursday use "Tues"/"Thurs".

/// Returned by the name lookups for an out-of-range index
pub const NAME_ERROR: &str = "Error";

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat"];

fn lookup(table: &[&'static str], index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i).copied())
        .unwrap_or(NAME_ERROR)
}

/// Name of zero-based month `index` [0, 11], or [`NAME_ERROR`]
pub fn month_name(index: i32, long_form: bool) -> &'static str {
    if long_form {
        lookup(&MONTHS_LONG, index)
    } else {
        lookup(&MONTHS_SHORT, index)
    }
}

/// Name of weekday `index` [0, 6] with Sunday = 0, or [`NAME_ERROR`]
pub fn weekday_name(index: i32, long_form: bool) -> &'static str {
    if long_form {
        lookup(&WEEKDAYS_LONG, index)
    } else {
        lookup(&WEEKDAYS_SHORT, index)
    }
}

/// Convert a 24-hour hour [0, 23] to the 12-hour display hour [1, 12]
pub const fn hour_24_to_12(h24: u8) -> u8 {
    if h24 > 12 {
        h24 - 12
    } else if h24 == 0 {
        12
    } else {
        h24
    }
}
