//! Hardware abstraction traits for network time synchronization
//!
//! This crate defines the platform collaborators a clock needs: network
//! status, a platform time service fed by NTP, a monotonic millisecond
//! counter and a sink for diagnostic lines. BSPs implement these traits.
//!
//! Delays use `embedded_hal_async::delay::DelayNs` directly.
//!
//! ## Optional adapters
//! - `embassy-net`: [`NetworkStatus`] for `embassy_net::Stack`
//! - `embassy-time`: [`EmbassyMonotonic`] backed by `embassy_time::Instant`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod diag;
pub mod network;
pub mod time;

#[cfg(any(feature = "embassy-net", feature = "embassy-time"))]
mod embassy;

pub use diag::DiagnosticSink;
pub use network::NetworkStatus;
pub use time::{Monotonic, TimeService, PLAUSIBLE_EPOCH};

#[cfg(feature = "embassy-time")]
pub use embassy::EmbassyMonotonic;

// Re-exported so implementors don't need a direct dependency
pub use embedded_hal_async::delay::DelayNs;
