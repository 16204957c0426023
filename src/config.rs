//! Display configuration and live updates

use crate::color::{Rgb, rgb_from_u32};
use crate::dimming::DimWindow;

/// Latest hour accepted for the dim window
const MAX_HOUR: u8 = 23;

/// Display preferences, read-only for the duration of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Show 0-23 instead of 1-12
    pub use_24h_format: bool,
    /// Hide the hour tens digit below 10 in 24h mode
    pub hide_leading_zero_24h: bool,
    /// Blink the separator once per second
    pub blink_separator: bool,
    pub base_brightness: u8,
    /// Solid color shared by every lit element
    pub color: Rgb,
    pub auto_dim: bool,
    pub dim_window: DimWindow,
}

impl DisplayConfig {
    /// Factory settings
    pub const DEFAULT: Self = Self {
        use_24h_format: false,
        hide_leading_zero_24h: false,
        blink_separator: true,
        base_brightness: 50,
        color: rgb_from_u32(0xFF_00_00),
        auto_dim: true,
        dim_window: DimWindow::new(22, 6),
    };

    /// Apply a single change
    pub fn apply(&mut self, change: ConfigChange) {
        match change {
            ConfigChange::Format {
                use_24h_format,
                hide_leading_zero_24h,
            } => {
                self.use_24h_format = use_24h_format;
                self.hide_leading_zero_24h = hide_leading_zero_24h;
            }
            ConfigChange::BlinkSeparator(enabled) => self.blink_separator = enabled,
            ConfigChange::Brightness(brightness) => self.base_brightness = brightness,
            ConfigChange::Color(color) => self.color = color,
            ConfigChange::AutoDim { enabled, window } => {
                self.auto_dim = enabled;
                self.dim_window = clamp_window(window);
            }
            ConfigChange::Replace(config) => {
                *self = Self {
                    dim_window: clamp_window(config.dim_window),
                    ..config
                };
            }
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn clamp_window(window: DimWindow) -> DimWindow {
    let start = if window.start_hour > MAX_HOUR { MAX_HOUR } else { window.start_hour };
    let end = if window.end_hour > MAX_HOUR { MAX_HOUR } else { window.end_hour };
    DimWindow::new(start, end)
}

/// Change pushed by the configuration store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    /// Change the hour format
    Format {
        use_24h_format: bool,
        hide_leading_zero_24h: bool,
    },
    /// Enable or disable separator blinking
    BlinkSeparator(bool),
    /// Change the base brightness
    Brightness(u8),
    /// Change the segment color
    Color(Rgb),
    /// Change auto-dim settings. Hours above 23 are clamped.
    AutoDim { enabled: bool, window: DimWindow },
    /// Replace the whole configuration (e.g. after loading from storage)
    Replace(DisplayConfig),
}
