use crate::blink::indicator_lit;
use crate::color::OFF;
use crate::config::DisplayConfig;
use crate::dimming::{BrightnessRange, effective_brightness};
use crate::frame::{ClockFrame, SEPARATOR_INDEX};
use crate::segment::{DigitSlot, StripRole, encode};
use crate::time::{TimeOfDay, decompose};

/// Clock frame renderer
///
/// Turns a time of day and a configuration snapshot into frames for the
/// hour and minute strips. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRenderer {
    brightness_range: BrightnessRange,
}

impl FrameRenderer {
    /// Renderer using the full 0-255 brightness range
    pub const fn new() -> Self {
        Self::with_brightness_range(BrightnessRange::FULL)
    }

    /// Renderer clamping output brightness to `range`
    pub const fn with_brightness_range(range: BrightnessRange) -> Self {
        Self {
            brightness_range: range,
        }
    }

    pub const fn brightness_range(&self) -> BrightnessRange {
        self.brightness_range
    }

    /// Render a new frame
    ///
    /// `blink` is the current [`BlinkState`](crate::BlinkState) value; it is
    /// ignored when separator blinking is disabled.
    pub fn render(&self, time: TimeOfDay, config: &DisplayConfig, blink: bool) -> ClockFrame {
        let mut frame = ClockFrame::new();
        self.render_into(&mut frame, time, config, blink);
        frame
    }

    /// Render into an existing frame, overwriting all of it
    pub fn render_into(
        &self,
        frame: &mut ClockFrame,
        time: TimeOfDay,
        config: &DisplayConfig,
        blink: bool,
    ) {
        let color = config.color;
        frame.hour.clear();
        frame.minute.clear();

        let separator = if indicator_lit(config.blink_separator, blink) {
            color
        } else {
            OFF
        };
        frame.hour.set(SEPARATOR_INDEX, separator);
        frame.minute.set(SEPARATOR_INDEX, separator);

        let digits = decompose(time, config);
        if !digits.suppress_hour_tens {
            let pattern = encode(digits.hour_tens, StripRole::Hour);
            frame.hour.draw(&pattern, DigitSlot::High, color);
        }
        let pattern = encode(digits.hour_units, StripRole::Hour);
        frame.hour.draw(&pattern, DigitSlot::Low, color);

        let pattern = encode(digits.minute_tens, StripRole::Minute);
        frame.minute.draw(&pattern, DigitSlot::Low, color);
        let pattern = encode(digits.minute_units, StripRole::Minute);
        frame.minute.draw(&pattern, DigitSlot::High, color);

        let brightness = self
            .brightness_range
            .clamp(effective_brightness(time.hour(), config));
        frame.hour.set_brightness(brightness);
        frame.minute.set_brightness(brightness);
    }
}
