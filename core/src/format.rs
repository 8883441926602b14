//! Clock and date strings
//!
//! Each rendering has a `Display` adapter for writing into any
//! `core::fmt::Write`, plus a helper returning a fixed-capacity
//! `heapless::String`. Capacities cover every value the field types can
//! hold, so rendering never truncates.
//!
//! Formats:
//! - clock:   `[H:M]`, `[H:M:S]`, `[H:M AM]`, `[H:M:S PM]` (no zero padding)
//! - date:    `Month D, YYYY` or `m/D/YYYY` with the zero-based month index,
//!   optionally prefixed with `Weekday, `
//! - asctime: `Www Mmm dd hh:mm:ss yyyy`

use core::fmt::{self, Display, Write};

use heapless::String;

use crate::calendar::LocalTime;
use crate::names::{hour_24_to_12, month_name, weekday_name};

pub const CLOCK_CAPACITY: usize = 16;
pub const DATE_CAPACITY: usize = 40;
pub const ASCTIME_CAPACITY: usize = 40;

pub type ClockString = String<CLOCK_CAPACITY>;
pub type DateString = String<DATE_CAPACITY>;
pub type AscTimeString = String<ASCTIME_CAPACITY>;

// asctime always uses these three-letter forms
const ASC_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const ASC_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 12-hour clock rendering of a [`LocalTime`]
#[derive(Debug, Clone, Copy)]
pub struct ClockDisplay {
    time: LocalTime,
    long_form: bool,
    seconds: bool,
}

impl Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.time;
        write!(f, "[{}:{}", hour_24_to_12(t.hour), t.minute)?;
        if self.seconds {
            write!(f, ":{}", t.second)?;
        }
        if self.long_form {
            f.write_str(if t.hour >= 12 { " PM" } else { " AM" })?;
        }
        f.write_str("]")
    }
}

/// Calendar date rendering of a [`LocalTime`]
#[derive(Debug, Clone, Copy)]
pub struct DateDisplay {
    time: LocalTime,
    long_form: bool,
    day_of_week: bool,
}

impl Display for DateDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.time;
        if self.day_of_week {
            write!(f, "{}, ", weekday_name(t.weekday as i32, self.long_form))?;
        }
        if self.long_form {
            write!(f, "{} {}, {}", month_name(t.month as i32, true), t.day, t.year)
        } else {
            write!(f, "{}/{}/{}", t.month, t.day, t.year)
        }
    }
}

/// C `asctime` layout, without the trailing newline
#[derive(Debug, Clone, Copy)]
pub struct AscTime {
    time: LocalTime,
}

impl Display for AscTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.time;
        let weekday = ASC_WEEKDAYS.get(t.weekday as usize).copied().unwrap_or("???");
        let month = ASC_MONTHS.get(t.month as usize).copied().unwrap_or("???");
        write!(
            f,
            "{} {}{:3} {:02}:{:02}:{:02} {}",
            weekday, month, t.day, t.hour, t.minute, t.second, t.year
        )
    }
}

impl LocalTime {
    pub const fn clock_display(&self, long_form: bool, seconds: bool) -> ClockDisplay {
        ClockDisplay {
            time: *self,
            long_form,
            seconds,
        }
    }

    pub const fn date_display(&self, long_form: bool, day_of_week: bool) -> DateDisplay {
        DateDisplay {
            time: *self,
            long_form,
            day_of_week,
        }
    }

    pub const fn asctime(&self) -> AscTime {
        AscTime { time: *self }
    }
}

fn render<const N: usize>(value: impl Display) -> String<N> {
    let mut out = String::new();
    // Capacity is sized for the widest rendering
    let _ = write!(out, "{}", value);
    out
}

pub fn clock(time: &LocalTime, long_form: bool, seconds: bool) -> ClockString {
    render(time.clock_display(long_form, seconds))
}

pub fn date(time: &LocalTime, long_form: bool, day_of_week: bool) -> DateString {
    render(time.date_display(long_form, day_of_week))
}

pub fn asctime(time: &LocalTime) -> AscTimeString {
    render(time.asctime())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8, second: u8) -> LocalTime {
        LocalTime {
            second,
            minute,
            hour,
            ..march_5_2024()
        }
    }

    /// Wednesday-labelled March 5, 2024 (weekday set by hand)
    fn march_5_2024() -> LocalTime {
        LocalTime {
            second: 3,
            minute: 5,
            hour: 9,
            day: 5,
            month: 2,
            year: 2024,
            weekday: 3,
            year_day: 64,
        }
    }

    #[test]
    fn test_clock_styles() {
        let t = at(9, 5, 3);
        assert_eq!(clock(&t, false, false).as_str(), "[9:5]");
        assert_eq!(clock(&t, false, true).as_str(), "[9:5:3]");
        assert_eq!(clock(&t, true, false).as_str(), "[9:5 AM]");
        assert_eq!(clock(&t, true, true).as_str(), "[9:5:3 AM]");
    }

    #[test]
    fn test_clock_afternoon_converts_hour() {
        let t = at(14, 5, 3);
        assert_eq!(clock(&t, false, true).as_str(), "[2:5:3]");
        assert_eq!(clock(&t, true, true).as_str(), "[2:5:3 PM]");
    }

    #[test]
    fn test_clock_noon_and_midnight() {
        assert_eq!(clock(&at(12, 30, 0), true, false).as_str(), "[12:30 PM]");
        assert_eq!(clock(&at(0, 0, 0), true, false).as_str(), "[12:0 AM]");
        assert_eq!(clock(&at(23, 59, 59), true, true).as_str(), "[11:59:59 PM]");
    }

    #[test]
    fn test_date_long_with_weekday() {
        let t = march_5_2024();
        assert_eq!(date(&t, true, true).as_str(), "Wednesday, March 5, 2024");
        assert_eq!(date(&t, true, false).as_str(), "March 5, 2024");
    }

    #[test]
    fn test_date_short_uses_month_index() {
        let t = march_5_2024();
        assert_eq!(date(&t, false, false).as_str(), "2/5/2024");
        assert_eq!(date(&t, false, true).as_str(), "Wed, 2/5/2024");
    }

    #[test]
    fn test_date_bad_weekday_renders_sentinel() {
        let t = LocalTime {
            weekday: 9,
            ..march_5_2024()
        };
        assert_eq!(date(&t, true, true).as_str(), "Error, March 5, 2024");
    }

    #[test]
    fn test_asctime_layout() {
        assert_eq!(asctime(&at(14, 5, 3)).as_str(), "Wed Mar  5 14:05:03 2024");

        let t = LocalTime::from_unix(1_704_078_000, -6 * 3600);
        assert_eq!(asctime(&t).as_str(), "Sun Dec 31 21:00:00 2023");
    }

    #[test]
    fn test_widest_values_fit() {
        let t = LocalTime {
            second: u8::MAX,
            minute: u8::MAX,
            hour: u8::MAX,
            day: u8::MAX,
            month: 8,
            year: i32::MIN,
            weekday: 3,
            year_day: 0,
        };
        assert!(clock(&t, true, true).ends_with(" PM]"));
        assert!(date(&t, true, true).ends_with("-2147483648"));
        assert!(asctime(&t).ends_with("-2147483648"));
    }

    #[test]
    fn test_display_into_writer() {
        let mut out: String<64> = String::new();
        write!(
            out,
            "{} {}",
            at(9, 5, 3).clock_display(true, false),
            march_5_2024().date_display(false, false)
        )
        .unwrap();
        assert_eq!(out.as_str(), "[9:5 AM] 2/5/2024");
    }
}
