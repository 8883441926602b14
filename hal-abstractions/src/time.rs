//! Platform time service and monotonic clock
//!
//! The time service is whatever keeps wall-clock time on the device (an SNTP
//! client writing an RTC, the ESP-IDF SNTP service, ...). Configuration is
//! fire-and-forget: the effect is only observed by polling [`TimeService::now`]
//! or [`TimeService::is_synchronized`].

/// Unix timestamp below which a clock reading is assumed to be a power-on
/// default rather than network time (2017-11-14 07:36:07 UTC).
pub const PLAUSIBLE_EPOCH: i64 = 1_510_644_967;

/// Wall-clock time source synchronized from NTP servers.
pub trait TimeService {
    /// Start synchronizing against `primary`, falling back to `secondary`.
    ///
    /// Offsets are in seconds east of UTC and are informational for
    /// platforms that keep local time themselves; [`TimeService::now`] must
    /// still return UTC.
    fn configure(
        &mut self,
        utc_offset_secs: i32,
        dst_offset_secs: i32,
        primary: &str,
        secondary: &str,
    );

    /// Current Unix time in seconds (UTC).
    fn now(&self) -> i64;

    /// Whether the clock has been set from the network.
    ///
    /// The default compares [`TimeService::now`] against
    /// [`PLAUSIBLE_EPOCH`]. Platforms that track sync completion explicitly
    /// should override this.
    fn is_synchronized(&self) -> bool {
        self.now() >= PLAUSIBLE_EPOCH
    }
}

impl<T: TimeService + ?Sized> TimeService for &mut T {
    fn configure(
        &mut self,
        utc_offset_secs: i32,
        dst_offset_secs: i32,
        primary: &str,
        secondary: &str,
    ) {
        (**self).configure(utc_offset_secs, dst_offset_secs, primary, secondary)
    }

    fn now(&self) -> i64 {
        (**self).now()
    }

    fn is_synchronized(&self) -> bool {
        (**self).is_synchronized()
    }
}

/// Monotonic millisecond counter, used to bound how long a sync may take.
pub trait Monotonic {
    fn now_ms(&self) -> u64;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(i64);

    impl TimeService for FixedClock {
        fn configure(&mut self, _: i32, _: i32, _: &str, _: &str) {}

        fn now(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_power_on_default_not_synchronized() {
        assert!(!FixedClock(0).is_synchronized());
        assert!(!FixedClock(PLAUSIBLE_EPOCH - 1).is_synchronized());
    }

    #[test]
    fn test_plausible_time_synchronized() {
        assert!(FixedClock(PLAUSIBLE_EPOCH).is_synchronized());
        assert!(FixedClock(1_709_647_503).is_synchronized());
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut clock = FixedClock(PLAUSIBLE_EPOCH);
        let by_ref = &mut clock;
        assert_eq!(by_ref.now(), PLAUSIBLE_EPOCH);
        assert!(by_ref.is_synchronized());
    }
}
