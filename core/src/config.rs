//! Clock configuration
//!
//! Find your timezone offset at <https://www.timeanddate.com/time/map/>.

/// Timezone offset from UTC in hours
pub const TIMEZONE_HOURS: i8 = -6;

/// Daylight saving offset in hours
pub const DST_HOURS: i8 = 0;

/// How long `setup_time` waits for the first sync
pub const SYNC_TIMEOUT_SECS: u32 = 10;

/// Interval between clock polls while waiting for sync
pub const POLL_INTERVAL_MS: u32 = 10;

/// Primary and secondary NTP servers
pub const NTP_SERVERS: [&str; 2] = ["pool.ntp.org", "time.nist.gov"];

/// Time sync and local time configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Hours east of UTC (negative for the Americas)
    pub timezone_hours: i8,
    /// Extra hours applied while daylight saving is in effect
    pub dst_hours: i8,
    /// Give up waiting for sync after this many seconds
    pub sync_timeout_secs: u32,
    /// Delay between polls of the platform clock
    pub poll_interval_ms: u32,
    /// NTP servers handed to the platform, primary first
    pub servers: [&'static str; 2],
}

impl ClockConfig {
    pub const fn new() -> Self {
        Self {
            timezone_hours: TIMEZONE_HOURS,
            dst_hours: DST_HOURS,
            sync_timeout_secs: SYNC_TIMEOUT_SECS,
            poll_interval_ms: POLL_INTERVAL_MS,
            servers: NTP_SERVERS,
        }
    }

    pub const fn timezone_offset_secs(&self) -> i32 {
        self.timezone_hours as i32 * 3600
    }

    pub const fn dst_offset_secs(&self) -> i32 {
        self.dst_hours as i32 * 3600
    }

    /// Total offset applied when converting UTC to local time
    pub const fn utc_offset_secs(&self) -> i32 {
        self.timezone_offset_secs() + self.dst_offset_secs()
    }

    pub const fn sync_timeout_ms(&self) -> u64 {
        self.sync_timeout_secs as u64 * 1000
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new()
    }
}
