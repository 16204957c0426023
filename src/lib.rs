#![no_std]

pub mod blink;
pub mod channel;
pub mod color;
pub mod config;
pub mod dimming;
pub mod frame;
pub mod frame_scheduler;
pub mod math8;
pub mod renderer;
pub mod segment;
pub mod time;

pub use blink::BlinkState;
pub use channel::{ConfigChannel, ConfigReceiver, ConfigSender};
pub use config::{ConfigChange, DisplayConfig};
pub use dimming::{BrightnessRange, DimWindow};
pub use frame::{ClockFrame, FrameBuffer, NUM_LEDS};
pub use frame_scheduler::{ClockScheduler, ClockSchedulerConfig, TickOutcome, TickResult};
pub use renderer::FrameRenderer;
pub use segment::{DigitSlot, SegmentPattern, StripRole};
pub use time::{DigitSet, TimeOfDay, TimeSource};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to the hour and minute strips.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write both strips. Brightness is carried by each frame.
    fn write(&mut self, frame: &ClockFrame);
}
