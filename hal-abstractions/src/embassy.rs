//! Adapters for the embassy network stack and time driver

#[cfg(feature = "embassy-net")]
impl crate::NetworkStatus for embassy_net::Stack<'_> {
    /// Connected once DHCP (or static config) has assigned an address.
    fn is_connected(&self) -> bool {
        self.is_config_up()
    }
}

/// [`crate::Monotonic`] backed by the embassy time driver.
///
/// Pair with `embassy_time::Delay` for the poll delay.
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyMonotonic;

#[cfg(feature = "embassy-time")]
impl crate::Monotonic for EmbassyMonotonic {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
