//! Time sync error types

/// Why `setup_time` did not synchronize the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// No network connection, sync was not attempted
    NotConnected,
    /// The clock never became valid within the sync timeout
    Timeout,
    /// The wait was cancelled before the clock became valid
    Cancelled,
}

impl SyncError {
    /// One-line diagnostic reported to the caller's sink
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotConnected => "Time Sync: Not connected to network, can't time sync",
            Self::Timeout => "Time Sync: Timed out waiting for sync",
            Self::Cancelled => "Time Sync: Cancelled while waiting for sync",
        }
    }
}

impl core::fmt::Display for SyncError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for SyncError {}
