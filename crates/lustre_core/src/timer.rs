//! Fixed-interval frame timer
//!
//! Effects never block. A timer only records whether periodic ticks are
//! wanted and converts elapsed wall time into a number of due ticks; the host
//! frame loop decides when to call [`FrameTimer::advance`].

use std::time::Duration;

use crate::error::{CoreError, Result};

/// Default tick interval (~60Hz)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// A periodic tick source owned by exactly one effect
#[derive(Clone, Debug)]
pub struct FrameTimer {
    interval: Duration,
    running: bool,
    disposed: bool,
    /// Time carried over between `advance` calls that did not fill a tick
    accumulated: Duration,
    /// Ticks delivered since the timer was last started
    fired: u64,
}

impl FrameTimer {
    /// Create a stopped timer with the given interval
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CoreError::ZeroInterval);
        }
        Ok(Self {
            interval,
            running: false,
            disposed: false,
            accumulated: Duration::ZERO,
            fired: 0,
        })
    }

    /// Create a timer from a millisecond interval
    pub fn from_millis(ms: u64) -> Result<Self> {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Ticks delivered since the last `start`
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start (or restart) ticking. Has no effect once disposed.
    pub fn start(&mut self) {
        if self.disposed {
            return;
        }
        self.running = true;
        self.accumulated = Duration::ZERO;
        self.fired = 0;
        tracing::trace!(interval = ?self.interval, "frame timer started");
    }

    /// Stop ticking and drop any partially accumulated time
    pub fn stop(&mut self) {
        if self.running {
            tracing::trace!(fired = self.fired, "frame timer stopped");
        }
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Permanently stop the timer. Later `start` calls are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.stop();
        self.disposed = true;
        tracing::debug!(fired = self.fired, "frame timer disposed");
    }

    /// Feed elapsed time and return how many ticks became due
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        let total = self.accumulated.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        // The remainder is below one interval
        let carried = u64::try_from(total % interval).unwrap_or(u64::MAX);
        self.accumulated = Duration::from_nanos(carried);
        let due = u32::try_from(total / interval).unwrap_or(u32::MAX);
        self.fired = self.fired.saturating_add(u64::from(due));
        due
    }

    /// Record a tick delivered directly by the host, bypassing `advance`
    pub fn fire(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.fired = self.fired.saturating_add(1);
        true
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            running: false,
            disposed: false,
            accumulated: Duration::ZERO,
            fired: 0,
        }
    }
}
