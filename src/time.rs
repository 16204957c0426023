//! Time-of-day decomposition into display digits

use crate::config::DisplayConfig;

/// Error returned by [`TimeOfDay::new`] for out-of-range components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTime {
    Hour(u8),
    Minute(u8),
}

/// Local wall-clock time, already resolved for timezone and DST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day. Hour must be 0-23, minute 0-59.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 {
            return Err(InvalidTime::Hour(hour));
        }
        if minute > 59 {
            return Err(InvalidTime::Minute(minute));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

/// Source of the current local time
///
/// Implementations handle network sync and timezone resolution.
/// Returning `None` means no time is available yet; the scheduler keeps the
/// last frame on the strips.
pub trait TimeSource {
    fn now(&mut self) -> Option<TimeOfDay>;
}

/// The four digits shown on the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSet {
    pub hour_tens: u8,
    pub hour_units: u8,
    pub minute_tens: u8,
    pub minute_units: u8,
    /// Hour tens digit stays dark
    pub suppress_hour_tens: bool,
}

/// Hour as it appears on the display.
///
/// In 12-hour mode midnight and noon both read 12.
pub const fn displayed_hour(hour: u8, use_24h_format: bool) -> u8 {
    if use_24h_format {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Split a time into display digits according to the format settings.
pub fn decompose(time: TimeOfDay, config: &DisplayConfig) -> DigitSet {
    let hour = displayed_hour(time.hour(), config.use_24h_format);
    let suppress_hour_tens = if config.use_24h_format {
        config.hide_leading_zero_24h && hour < 10
    } else {
        hour < 10
    };

    DigitSet {
        hour_tens: hour / 10,
        hour_units: hour % 10,
        minute_tens: time.minute() / 10,
        minute_units: time.minute() % 10,
        suppress_hour_tens,
    }
}
