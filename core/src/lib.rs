//! Platform-agnostic clock logic for IoT firmware
//!
//! Synchronizes the platform clock from NTP servers and renders local time
//! as clock and date strings. Hardware access goes through the traits in
//! `hal-abstractions`; this crate has NO hardware dependencies.
//!
//! ## Modules
//! - **`sync`**: [`TimeSync`] state object and the sync routine
//! - **`calendar`**: UTC epoch to broken-down local time
//! - **`format`**: clock, date and asctime renderings
//! - **`names`**: month/weekday names and 12-hour conversion
//! - **`config`**: [`ClockConfig`] and its default constants

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod names;
pub mod sync;

pub use calendar::LocalTime;
pub use config::ClockConfig;
pub use error::SyncError;
pub use format::{AscTimeString, ClockString, DateString};
pub use names::{hour_24_to_12, month_name, weekday_name, NAME_ERROR};
pub use sync::TimeSync;
