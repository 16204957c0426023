//! Desktop preview app for myrtio-segment-clock
//!
//! Drives the clock scheduler with a virtual clock and paints both strips
//! in a window. Every settings change goes through the config channel, the
//! same way the firmware's configuration store does.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_segment_clock::{
    ClockFrame, ClockScheduler, ConfigChange, ConfigChannel, ConfigSender, DimWindow,
    DisplayConfig, FrameBuffer, Instant, NUM_LEDS, OutputDriver, Rgb, TimeOfDay, TimeSource,
};

/// Config channel size
const CONFIG_CHANNEL_SIZE: usize = 16;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 22.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Static config channel for communication between UI and scheduler
static CONFIG_CHANNEL: ConfigChannel<CONFIG_CHANNEL_SIZE> = ConfigChannel::new();

/// Virtual wall clock shared between the app and the scheduler
#[derive(Clone)]
struct VirtualClock {
    day_ms: Rc<Cell<u64>>,
    synced: Rc<Cell<bool>>,
}

impl TimeSource for VirtualClock {
    fn now(&mut self) -> Option<TimeOfDay> {
        if !self.synced.get() {
            return None;
        }
        let minutes = self.day_ms.get() / 60_000;
        #[allow(clippy::cast_possible_truncation)]
        TimeOfDay::new((minutes / 60 % 24) as u8, (minutes % 60) as u8).ok()
    }
}

/// Keeps the last frame written by the scheduler
#[derive(Default)]
struct PreviewOutput {
    frame: ClockFrame,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, frame: &ClockFrame) {
        self.frame = frame.clone();
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_title("Segment Clock Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-segment-clock-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler:
        ClockScheduler<'static, VirtualClock, PreviewOutput, CONFIG_CHANNEL_SIZE>,
    config_sender: ConfigSender<'static, CONFIG_CHANNEL_SIZE>,
    clock: VirtualClock,

    /// UI copy of the configuration (tracked to detect changes)
    config: DisplayConfig,
    /// Monotonic time fed to the scheduler
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Virtual seconds per real second
    time_scale: f32,
    /// Color picker state
    color: [u8; 3],
}

impl PreviewApp {
    fn new() -> Self {
        let config = DisplayConfig::DEFAULT;
        let clock = VirtualClock {
            day_ms: Rc::new(Cell::new(9 * 60 * 60 * 1000)),
            synced: Rc::new(Cell::new(true)),
        };
        let scheduler = ClockScheduler::new(
            clock.clone(),
            PreviewOutput::default(),
            CONFIG_CHANNEL.receiver(),
            config,
        );

        Self {
            scheduler,
            config_sender: CONFIG_CHANNEL.sender(),
            clock,
            config,
            t_ms: 0,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            color: [config.color.r, config.color.g, config.color.b],
        }
    }

    fn send(&self, change: ConfigChange) {
        let _ = self.config_sender.try_send(change);
    }

    /// Advance the monotonic and the virtual wall clock
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = delta.as_millis() as u64;
        self.t_ms += delta_ms;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale)) as u64;
        let day_ms = (self.clock.day_ms.get() + scaled) % MS_PER_DAY;
        self.clock.day_ms.set(day_ms);
    }

    fn settings_ui(&mut self, ui: &mut egui::Ui) {
        let old = self.config;

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.use_24h_format, "24h format");
            ui.checkbox(&mut self.config.hide_leading_zero_24h, "Hide leading zero (24h)");
            ui.checkbox(&mut self.config.blink_separator, "Blink separator");
        });
        if (old.use_24h_format, old.hide_leading_zero_24h)
            != (self.config.use_24h_format, self.config.hide_leading_zero_24h)
        {
            self.send(ConfigChange::Format {
                use_24h_format: self.config.use_24h_format,
                hide_leading_zero_24h: self.config.hide_leading_zero_24h,
            });
        }
        if old.blink_separator != self.config.blink_separator {
            self.send(ConfigChange::BlinkSeparator(self.config.blink_separator));
        }

        ui.horizontal(|ui| {
            ui.label("Brightness:");
            ui.add(egui::Slider::new(&mut self.config.base_brightness, 5u8..=255u8));
            ui.label("Color:");
            ui.color_edit_button_srgb(&mut self.color);
        });
        if old.base_brightness != self.config.base_brightness {
            self.send(ConfigChange::Brightness(self.config.base_brightness));
        }
        let color = Rgb {
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
        };
        if color != self.config.color {
            self.config.color = color;
            self.send(ConfigChange::Color(color));
        }

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.auto_dim, "Auto dim");
            ui.label("from");
            ui.add(egui::DragValue::new(&mut self.config.dim_window.start_hour).range(0u8..=23u8));
            ui.label("to");
            ui.add(egui::DragValue::new(&mut self.config.dim_window.end_hour).range(0u8..=23u8));
        });
        if (old.auto_dim, old.dim_window) != (self.config.auto_dim, self.config.dim_window) {
            self.send(ConfigChange::AutoDim {
                enabled: self.config.auto_dim,
                window: DimWindow::new(
                    self.config.dim_window.start_hour,
                    self.config.dim_window.end_hour,
                ),
            });
        }
    }

    fn clock_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let minutes = self.clock.day_ms.get() / 60_000;
            let seconds = self.clock.day_ms.get() / 1000 % 60;
            ui.label(format!(
                "Virtual time: {:02}:{:02}:{:02}",
                minutes / 60,
                minutes % 60,
                seconds
            ));
            ui.add_space(8.0);
            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.time_scale, 1.0..=3600.0).logarithmic(true));
            ui.add_space(8.0);
            let mut synced = self.clock.synced.get();
            ui.checkbox(&mut synced, "Time synced");
            self.clock.synced.set(synced);
        });
    }
}

fn paint_strip(ui: &mut egui::Ui, label: &str, strip: &FrameBuffer) {
    ui.label(format!("{label} (brightness {})", strip.brightness()));
    let pitch = LED_SIZE + LED_GAP;
    #[allow(clippy::cast_precision_loss)]
    let width = NUM_LEDS as f32 * pitch;
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, pitch), egui::Sense::hover());
    let origin = response.rect.min;

    #[allow(clippy::cast_precision_loss)]
    for (i, pixel) in strip.scaled_pixels().enumerate() {
        let rect = egui::Rect::from_min_size(
            egui::pos2(origin.x + i as f32 * pitch, origin.y),
            egui::vec2(LED_SIZE, LED_SIZE),
        );
        painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.scheduler.tick(Instant::from_millis(self.t_ms));

        // Request continuous repaint for the blinking separator
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.clock_ui(ui);
            ui.add_space(8.0);
            self.settings_ui(ui);
            ui.add_space(16.0);

            let frame = &self.scheduler.output().frame;
            paint_strip(ui, "Hours", &frame.hour);
            ui.add_space(8.0);
            paint_strip(ui, "Minutes", &frame.minute);
        });
    }
}
