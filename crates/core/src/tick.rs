//! Tick scheduling: sleep until the next distinct clock value.
//!
//! Unit `v` of the day starts at `v * 86400000 / 65536` ms. Waking up at the
//! start of unit `v + 1` means every redraw shows a new value, at most about a
//! millisecond late.

use std::time::Duration;

use crate::time::TimeSource;
use crate::types::{ClockMode, MIN_TICK_DELAY_MS, MS_PER_DAY, UNITS_PER_DAY};

/// Millisecond at which unit `value + 1` begins: `ceil((v+1) * 86400000 / 65536)`.
///
/// ```
/// use bin_clock_core::tick::next_tick_ms;
///
/// assert_eq!(next_tick_ms(0), 1319);
/// assert_eq!(next_tick_ms(65_535), 86_400_000);
/// ```
pub fn next_tick_ms(value: i64) -> i64 {
    let num = (value as i128 + 1) * MS_PER_DAY as i128;
    let den = UNITS_PER_DAY as i128;
    -((-num).div_euclid(den)) as i64
}

/// Delay until the value after `value` is due, never below 10ms.
pub fn tick_delay_ms(value: i64, now_ms: i64) -> u64 {
    let delay = next_tick_ms(value) - now_ms;
    delay.max(MIN_TICK_DELAY_MS as i64) as u64
}

/// Unit containing `ms`, floored.
pub fn unit_at(ms: i64) -> i64 {
    (ms as i128 * UNITS_PER_DAY as i128).div_euclid(MS_PER_DAY as i128) as i64
}

/// Computes how long the display may sleep before its next redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    mode: ClockMode,
}

impl TickScheduler {
    pub fn new(mode: ClockMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ClockMode) {
        log::debug!("tick: mode {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    /// Delay from `now_ms` (on the mode's scale) to the next unit boundary.
    ///
    /// Day mode counts from local midnight, epoch mode from the clock epoch;
    /// both use the same unit length.
    pub fn delay_after(&self, now_ms: i64) -> Duration {
        Duration::from_millis(tick_delay_ms(unit_at(now_ms), now_ms))
    }

    /// Delay for the current reading of `source`.
    pub fn next_delay(&self, source: &dyn TimeSource) -> Duration {
        self.delay_after(source.scheduler_ms(self.mode))
    }
}
