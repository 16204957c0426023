//! Time-of-day brightness scheduling

use crate::config::DisplayConfig;

/// Brightness is divided by this inside the dim window
pub const DIM_DIVISOR: u8 = 3;

/// Hours of the day during which auto-dim applies
///
/// The window is `[start_hour, end_hour)` and wraps through midnight when
/// `start_hour > end_hour`. Equal hours cover the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl DimWindow {
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Check if the hour falls inside the window
    pub const fn contains(self, hour: u8) -> bool {
        let (start, end) = (self.start_hour, self.end_hour);
        if start < end {
            start <= hour && hour < end
        } else if start > end {
            hour >= start || hour < end
        } else {
            true
        }
    }
}

/// Brightness for the current hour
pub fn effective_brightness(hour: u8, config: &DisplayConfig) -> u8 {
    if config.auto_dim && config.dim_window.contains(hour) {
        config.base_brightness / DIM_DIVISOR
    } else {
        config.base_brightness
    }
}

/// Valid brightness range of the physical strips
///
/// Used to cap power draw or to keep a minimum visible level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    /// Full 0-255 range
    pub const FULL: Self = Self { min: 0, max: 255 };

    /// Create a range. Bounds are swapped if given in reverse.
    pub const fn new(min: u8, max: u8) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    pub const fn clamp(self, brightness: u8) -> u8 {
        if brightness < self.min {
            self.min
        } else if brightness > self.max {
            self.max
        } else {
            brightness
        }
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self::FULL
    }
}
