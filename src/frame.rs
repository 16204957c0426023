//! Per-strip frame buffers

use crate::color::{OFF, Rgb, scale_rgb};
use crate::segment::{DigitSlot, SegmentPattern};

/// Number of elements on each strip
pub const NUM_LEDS: usize = 15;

/// Element driving the separator indicator
pub const SEPARATOR_INDEX: usize = 0;

/// Colors for one strip plus the brightness applied to all of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [Rgb; NUM_LEDS],
    brightness: u8,
}

impl FrameBuffer {
    /// All elements off, full brightness
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; NUM_LEDS],
            brightness: 255,
        }
    }

    /// Turn every element off
    pub fn clear(&mut self) {
        self.pixels = [OFF; NUM_LEDS];
    }

    /// Set a single element. Indices past the strip are ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Draw a digit into the given slot
    pub fn draw(&mut self, pattern: &SegmentPattern, slot: DigitSlot, color: Rgb) {
        for (index, on) in pattern.elements(slot) {
            self.set(index, if on { color } else { OFF });
        }
    }

    pub const fn pixels(&self) -> &[Rgb; NUM_LEDS] {
        &self.pixels
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.pixels.get(index).is_some_and(|pixel| *pixel != OFF)
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Colors with the frame brightness applied
    ///
    /// For drivers that have no hardware brightness control.
    pub fn scaled_pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels
            .iter()
            .map(|pixel| scale_rgb(*pixel, self.brightness))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames for both strips of the clock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockFrame {
    pub hour: FrameBuffer,
    pub minute: FrameBuffer,
}

impl ClockFrame {
    pub const fn new() -> Self {
        Self {
            hour: FrameBuffer::new(),
            minute: FrameBuffer::new(),
        }
    }
}
