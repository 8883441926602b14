//! Network time synchronization state
//!
//! [`TimeSync`] owns the platform time service together with the monotonic
//! clock and delay used while waiting for the first sync, and remembers
//! whether a sync has ever succeeded. Whoever manages the device lifecycle
//! owns it and hands out references.
//!
//! ## Usage
//! ```ignore
//! let mut clock = TimeSync::new(sntp_service, EmbassyMonotonic, embassy_time::Delay);
//! if clock.setup_time(&stack, &mut console).await.is_ok() {
//!     info!("{} {}", clock.date_default().as_str(), clock.clock_default().as_str());
//! }
//! ```

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use hal_abstractions::{DelayNs, DiagnosticSink, Monotonic, NetworkStatus, TimeService};

use crate::calendar::LocalTime;
use crate::config::ClockConfig;
use crate::error::SyncError;
use crate::format::{self, AscTimeString, ClockString, DateString};

/// Clock synchronized from NTP, with local time formatting
pub struct TimeSync<S, M, D> {
    service: S,
    monotonic: M,
    delay: D,
    config: ClockConfig,
    synced: bool,
}

impl<S, M, D> TimeSync<S, M, D> {
    pub fn new(service: S, monotonic: M, delay: D) -> Self {
        Self::with_config(service, monotonic, delay, ClockConfig::default())
    }

    pub fn with_config(service: S, monotonic: M, delay: D, config: ClockConfig) -> Self {
        Self {
            service,
            monotonic,
            delay,
            config,
            synced: false,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Check if time has been synchronized with NTP
    ///
    /// Only use the local time accessors once this returns `true`. Once set
    /// it stays set for the lifetime of this object.
    pub fn is_time_sync(&self) -> bool {
        self.synced
    }
}

impl<S, M, D> TimeSync<S, M, D>
where
    S: TimeService,
    M: Monotonic,
    D: DelayNs,
{
    /// Synchronize time with the configured NTP servers
    ///
    /// Requires a network connection. Configures the platform time service,
    /// then polls it every `poll_interval_ms` until it reports a valid clock
    /// or `sync_timeout_secs` elapse. Failures are reported once to
    /// `diagnostics` and leave the sync state untouched.
    pub async fn setup_time<N, G>(
        &mut self,
        network: &N,
        diagnostics: &mut G,
    ) -> Result<(), SyncError>
    where
        N: NetworkStatus + ?Sized,
        G: DiagnosticSink + ?Sized,
    {
        if !network.is_connected() {
            warn!("Time sync skipped: network is down");
            return Err(Self::fail(SyncError::NotConnected, diagnostics));
        }

        let [primary, secondary] = self.config.servers;
        self.service.configure(
            self.config.timezone_offset_secs(),
            self.config.dst_offset_secs(),
            primary,
            secondary,
        );
        info!("Waiting on time sync from {} / {}", primary, secondary);

        let timeout_ms = self.config.sync_timeout_ms();
        let start = self.monotonic.now_ms();
        while !self.service.is_synchronized() {
            self.delay.delay_ms(self.config.poll_interval_ms).await;

            let elapsed = self.monotonic.now_ms().saturating_sub(start);
            if elapsed >= timeout_ms {
                warn!("Time sync timed out after {} ms", elapsed);
                return Err(Self::fail(SyncError::Timeout, diagnostics));
            }
        }

        self.synced = true;
        info!(
            "Time synchronized after {} ms: {}",
            self.monotonic.now_ms().saturating_sub(start),
            self.service.now()
        );
        Ok(())
    }

    /// [`TimeSync::setup_time`], abandoned early if `cancel` is signalled
    pub async fn setup_time_until<N, G, R>(
        &mut self,
        network: &N,
        diagnostics: &mut G,
        cancel: &Signal<R, ()>,
    ) -> Result<(), SyncError>
    where
        N: NetworkStatus + ?Sized,
        G: DiagnosticSink + ?Sized,
        R: RawMutex,
    {
        match select(self.setup_time(network, diagnostics), cancel.wait()).await {
            Either::First(result) => result,
            Either::Second(()) => {
                info!("Time sync cancelled");
                Err(SyncError::Cancelled)
            }
        }
    }

    fn fail<G: DiagnosticSink + ?Sized>(error: SyncError, diagnostics: &mut G) -> SyncError {
        diagnostics.report(error.message());
        error
    }
}

impl<S: TimeService, M, D> TimeSync<S, M, D> {
    /// Current local time, read fresh from the platform clock
    ///
    /// Meaningless until [`TimeSync::is_time_sync`] is `true`: the platform
    /// clock still holds its power-on default.
    pub fn local_time(&self) -> LocalTime {
        LocalTime::from_unix(self.service.now(), self.config.utc_offset_secs())
    }

    /// Local time, or `None` before the first successful sync
    pub fn try_local_time(&self) -> Option<LocalTime> {
        self.synced.then(|| self.local_time())
    }

    /// asctime layout: `Www Mmm dd hh:mm:ss yyyy`
    pub fn time_date_string(&self) -> AscTimeString {
        format::asctime(&self.local_time())
    }

    /// [0, 59]
    pub fn second(&self) -> u8 {
        self.local_time().second
    }

    /// [0, 59]
    pub fn minute(&self) -> u8 {
        self.local_time().minute
    }

    /// [0, 23]
    pub fn hour(&self) -> u8 {
        self.local_time().hour
    }

    /// `[H:M]`, with `:S` appended when `seconds` and ` AM`/` PM` when `long_form`
    pub fn clock(&self, long_form: bool, seconds: bool) -> ClockString {
        format::clock(&self.local_time(), long_form, seconds)
    }

    /// `[H:M AM]`
    pub fn clock_default(&self) -> ClockString {
        self.clock(true, false)
    }

    /// `Month D, YYYY` or `m/D/YYYY`, optionally prefixed with `Weekday, `
    pub fn date(&self, long_form: bool, day_of_week: bool) -> DateString {
        format::date(&self.local_time(), long_form, day_of_week)
    }

    /// `Weekday, Month D, YYYY`
    pub fn date_default(&self) -> DateString {
        self.date(true, true)
    }
}
