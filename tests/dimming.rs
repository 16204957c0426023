mod tests {
    use myrtio_segment_clock::dimming::{BrightnessRange, DimWindow, effective_brightness};
    use myrtio_segment_clock::DisplayConfig;

    fn config(auto_dim: bool, start: u8, end: u8, base: u8) -> DisplayConfig {
        DisplayConfig {
            auto_dim,
            dim_window: DimWindow::new(start, end),
            base_brightness: base,
            ..DisplayConfig::DEFAULT
        }
    }

    #[test]
    fn test_window_wrapping_midnight() {
        let cfg = config(true, 22, 6, 90);
        assert_eq!(effective_brightness(23, &cfg), 30);
        assert_eq!(effective_brightness(22, &cfg), 30);
        assert_eq!(effective_brightness(0, &cfg), 30);
        assert_eq!(effective_brightness(5, &cfg), 30);
        assert_eq!(effective_brightness(6, &cfg), 90);
        assert_eq!(effective_brightness(10, &cfg), 90);
        assert_eq!(effective_brightness(21, &cfg), 90);
    }

    #[test]
    fn test_window_within_day() {
        let window = DimWindow::new(8, 17);
        assert!(!window.contains(7));
        assert!(window.contains(8));
        assert!(window.contains(16));
        assert!(!window.contains(17));
        assert!(!window.contains(23));
    }

    #[test]
    fn test_equal_bounds_dim_all_day() {
        let cfg = config(true, 6, 6, 90);
        for hour in 0..24 {
            assert_eq!(effective_brightness(hour, &cfg), 30, "hour {hour}");
        }
    }

    #[test]
    fn test_auto_dim_disabled() {
        let cfg = config(false, 22, 6, 90);
        for hour in 0..24 {
            assert_eq!(effective_brightness(hour, &cfg), 90, "hour {hour}");
        }
    }

    #[test]
    fn test_dim_rounds_down() {
        assert_eq!(effective_brightness(23, &config(true, 22, 6, 50)), 16);
        assert_eq!(effective_brightness(23, &config(true, 22, 6, 2)), 0);
        assert_eq!(effective_brightness(23, &config(true, 22, 6, 255)), 85);
    }

    #[test]
    fn test_brightness_range() {
        let range = BrightnessRange::new(10, 200);
        assert_eq!(range.clamp(0), 10);
        assert_eq!(range.clamp(100), 100);
        assert_eq!(range.clamp(255), 200);

        let swapped = BrightnessRange::new(200, 10);
        assert_eq!((swapped.min(), swapped.max()), (10, 200));

        assert_eq!(BrightnessRange::default(), BrightnessRange::FULL);
        assert_eq!(BrightnessRange::FULL.clamp(0), 0);
        assert_eq!(BrightnessRange::FULL.clamp(255), 255);
    }
}
