//! Cadence scheduling for the clock.
//!
//! Provides portable once-per-second pacing without async/await or
//! platform-specific timers. The caller owns the loop and passes the current
//! monotonic time; it may poll as often as it likes.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::blink::BlinkState;
use crate::channel::ConfigReceiver;
use crate::config::DisplayConfig;
use crate::dimming::BrightnessRange;
use crate::frame::ClockFrame;
use crate::renderer::FrameRenderer;
use crate::time::TimeSource;

/// Default interval between renders (blink period).
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(1000);

/// Scheduler settings
#[derive(Debug, Clone, Copy)]
pub struct ClockSchedulerConfig {
    /// Minimum time between two render actions
    pub cadence: Duration,
    /// Output brightness clamp
    pub brightness_range: BrightnessRange,
}

impl Default for ClockSchedulerConfig {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            brightness_range: BrightnessRange::FULL,
        }
    }
}

/// What a call to [`ClockScheduler::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Less than one cadence period since the last action
    Idle,
    /// A new frame was written to the output
    Rendered,
    /// The period elapsed but no time was available; the output kept its
    /// previous frame
    TimeUnavailable,
}

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    pub outcome: TickOutcome,
    /// The earliest instant the next action can happen.
    pub next_deadline: Instant,
    /// How long to wait until the next action (zero if already due).
    pub sleep_duration: Duration,
}

/// Portable clock scheduler.
///
/// Once per cadence period it:
/// 1. Applies pending configuration changes
/// 2. Advances the blink state
/// 3. Renders the current time and writes both strips
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = ClockScheduler::new(rtc, strips, CONFIG.receiver(), DisplayConfig::DEFAULT);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct ClockScheduler<'a, T: TimeSource, O: OutputDriver, const CONFIG_CHANNEL_SIZE: usize> {
    time: T,
    output: O,
    updates: ConfigReceiver<'a, CONFIG_CHANNEL_SIZE>,
    renderer: FrameRenderer,

    config: DisplayConfig,
    blink: BlinkState,
    frame: ClockFrame,
    cadence: Duration,
    last_action: Option<Instant>,
}

impl<'a, T: TimeSource, O: OutputDriver, const CONFIG_CHANNEL_SIZE: usize>
    ClockScheduler<'a, T, O, CONFIG_CHANNEL_SIZE>
{
    /// Create a scheduler with the default one-second cadence.
    pub fn new(
        time: T,
        output: O,
        updates: ConfigReceiver<'a, CONFIG_CHANNEL_SIZE>,
        config: DisplayConfig,
    ) -> Self {
        Self::with_config(time, output, updates, config, ClockSchedulerConfig::default())
    }

    /// Create a scheduler with custom settings.
    pub fn with_config(
        time: T,
        output: O,
        updates: ConfigReceiver<'a, CONFIG_CHANNEL_SIZE>,
        config: DisplayConfig,
        scheduler: ClockSchedulerConfig,
    ) -> Self {
        Self {
            time,
            output,
            updates,
            renderer: FrameRenderer::with_brightness_range(scheduler.brightness_range),
            config,
            blink: BlinkState::new(),
            frame: ClockFrame::new(),
            cadence: scheduler.cadence,
            last_action: None,
        }
    }

    /// Poll the scheduler.
    ///
    /// Acts on the first call and then whenever at least one cadence period
    /// has passed since the previous action. Polling more often is harmless.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        if let Some(deadline) = self.next_deadline() {
            if now < deadline {
                return TickResult {
                    outcome: TickOutcome::Idle,
                    next_deadline: deadline,
                    sleep_duration: deadline.saturating_duration_since(now),
                };
            }
        }

        self.updates.drain_into(&mut self.config);
        self.blink.advance();

        let outcome = if let Some(time) = self.time.now() {
            self.renderer
                .render_into(&mut self.frame, time, &self.config, self.blink.value());
            self.output.write(&self.frame);
            TickOutcome::Rendered
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[ClockScheduler.tick] time unavailable, keeping last frame");
            TickOutcome::TimeUnavailable
        };

        self.last_action = Some(now);
        TickResult {
            outcome,
            next_deadline: now + self.cadence,
            sleep_duration: self.cadence,
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.last_action.map(|last| last + self.cadence)
    }

    /// Configuration used for the most recent frame
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub const fn blink(&self) -> BlinkState {
        self.blink
    }

    /// Most recently rendered frame
    pub const fn frame(&self) -> &ClockFrame {
        &self.frame
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time
    }
}
