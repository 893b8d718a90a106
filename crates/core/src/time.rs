//! Time source: wall clock -> clock values.
//!
//! The renderer never reads the clock itself. The conversions here are pure
//! functions of milliseconds; [`TimeSource`] is the seam where the real clock
//! (or a fixed one in tests) comes in.

use chrono::{Local, Offset, Timelike, Utc};

use crate::types::{ClockMode, EPOCH_UNIX_MS, MS_PER_DAY, UNITS_PER_DAY};

/// 16-bit fraction of the day: `floor(ms * 65536 / 86400000)`.
///
/// Inputs of a full day or more wrap around.
///
/// ```
/// use bin_clock_core::time::day_value;
///
/// assert_eq!(day_value(0), 0);
/// assert_eq!(day_value(43_200_000), 0x8000); // noon
/// assert_eq!(day_value(86_399_999), 0xFFFF);
/// ```
pub fn day_value(ms_since_midnight: u64) -> u16 {
    let ms = ms_since_midnight % MS_PER_DAY;
    (ms * UNITS_PER_DAY / MS_PER_DAY) as u16
}

/// Day units elapsed since [`EPOCH_UNIX_MS`], floored, as a signed count.
pub fn epoch_units(unix_ms: i64) -> i64 {
    let since = unix_ms as i128 - EPOCH_UNIX_MS as i128;
    (since * UNITS_PER_DAY as i128).div_euclid(MS_PER_DAY as i128) as i64
}

/// 32-bit extended value: high half counts days since the epoch, low half is
/// the UTC time of day. Instants before the epoch wrap (two's complement).
pub fn epoch_value(unix_ms: i64) -> u32 {
    epoch_units(unix_ms) as u32
}

/// Reads the current time.
pub trait TimeSource {
    /// Milliseconds since local midnight.
    fn ms_since_midnight(&self) -> u64;

    /// Milliseconds since the unix epoch.
    fn unix_ms(&self) -> i64;

    /// Local UTC offset in seconds (east positive).
    fn utc_offset_secs(&self) -> i32 {
        0
    }

    /// Current clock value for `mode`.
    fn value(&self, mode: ClockMode) -> u32 {
        match mode {
            ClockMode::Day => day_value(self.ms_since_midnight()) as u32,
            ClockMode::Epoch => epoch_value(self.unix_ms()),
        }
    }

    /// Milliseconds on the scale the scheduler uses for `mode`.
    fn scheduler_ms(&self, mode: ClockMode) -> i64 {
        match mode {
            ClockMode::Day => self.ms_since_midnight() as i64,
            ClockMode::Epoch => self.unix_ms() - EPOCH_UNIX_MS,
        }
    }
}

/// The system clock via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn ms_since_midnight(&self) -> u64 {
        let now = Local::now();
        let secs = now.num_seconds_from_midnight() as u64;
        // Leap seconds report nanos >= 1e9; clamp into the current second.
        let millis = (now.nanosecond() / 1_000_000).min(999) as u64;
        secs * 1000 + millis
    }

    fn unix_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn utc_offset_secs(&self) -> i32 {
        Local::now().offset().fix().local_minus_utc()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTime {
    pub ms_since_midnight: u64,
    pub unix_ms: i64,
    pub utc_offset_secs: i32,
}

impl FixedTime {
    pub fn at_day_ms(ms_since_midnight: u64) -> Self {
        Self {
            ms_since_midnight,
            ..Self::default()
        }
    }

    pub fn at_unix_ms(unix_ms: i64) -> Self {
        Self {
            unix_ms,
            ms_since_midnight: unix_ms.rem_euclid(MS_PER_DAY as i64) as u64,
            utc_offset_secs: 0,
        }
    }
}

impl TimeSource for FixedTime {
    fn ms_since_midnight(&self) -> u64 {
        self.ms_since_midnight
    }

    fn unix_ms(&self) -> i64 {
        self.unix_ms
    }

    fn utc_offset_secs(&self) -> i32 {
        self.utc_offset_secs
    }
}

/// Format an offset as `UTC+01:00`, or plain `UTC` when zero.
pub fn utc_offset_label(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return String::from("UTC");
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, abs % 3600 / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_value_steps_every_unit() {
        // One unit is 1318.359375ms.
        assert_eq!(day_value(1318), 0);
        assert_eq!(day_value(1319), 1);
        assert_eq!(day_value(MS_PER_DAY), 0);
    }

    #[test]
    fn epoch_value_counts_days_in_high_half() {
        assert_eq!(epoch_value(EPOCH_UNIX_MS), 0);
        let three_days_and_noon = EPOCH_UNIX_MS + 3 * MS_PER_DAY as i64 + 43_200_000;
        assert_eq!(epoch_value(three_days_and_noon), 0x0003_8000);
    }

    #[test]
    fn epoch_value_floors_before_epoch() {
        assert_eq!(epoch_units(EPOCH_UNIX_MS - 1), -1);
        assert_eq!(epoch_value(EPOCH_UNIX_MS - 1), u32::MAX);
    }

    #[test]
    fn fixed_time_drives_both_modes() {
        let t = FixedTime::at_unix_ms(EPOCH_UNIX_MS + MS_PER_DAY as i64 + 43_200_000);
        assert_eq!(t.value(ClockMode::Day), 0x8000);
        assert_eq!(t.value(ClockMode::Epoch), 0x0001_8000);
        assert_eq!(t.scheduler_ms(ClockMode::Day), 43_200_000);
        assert_eq!(t.scheduler_ms(ClockMode::Epoch), MS_PER_DAY as i64 + 43_200_000);
    }

    #[test]
    fn offset_labels() {
        assert_eq!(utc_offset_label(0), "UTC");
        assert_eq!(utc_offset_label(3600), "UTC+01:00");
        assert_eq!(utc_offset_label(-(9 * 3600 + 30 * 60)), "UTC-09:30");
    }

    #[test]
    fn system_clock_stays_in_range() {
        let clock = SystemTimeSource;
        assert!(clock.ms_since_midnight() < MS_PER_DAY);
        assert!(clock.unix_ms() > 0);
    }
}
