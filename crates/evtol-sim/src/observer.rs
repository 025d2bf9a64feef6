//! Run observer trait for progress reporting.

use std::time::Duration;

/// Callbacks invoked by [`FleetRunner::run`][crate::FleetRunner::run] on
/// the supervisor thread.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — console progress line
///
/// ```rust,ignore
/// struct Progress;
///
/// impl RunObserver for Progress {
///     fn on_progress(&mut self, elapsed: Duration, total: Duration) {
///         print!("\r[simulating] {:.1}s / {:.0}s", elapsed.as_secs_f64(), total.as_secs_f64());
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before any worker thread starts.
    fn on_start(&mut self, _fleet_size: usize, _chargers: u32) {}

    /// Called roughly every 100 ms of wall-clock time while the run is in
    /// progress.
    fn on_progress(&mut self, _elapsed: Duration, _total: Duration) {}

    /// Called once after every worker has been joined.
    fn on_finish(&mut self, _elapsed: Duration) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
