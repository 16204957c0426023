mod tests {
    use myrtio_segment_clock::DisplayConfig;
    use myrtio_segment_clock::time::{
        DigitSet, InvalidTime, TimeOfDay, decompose, displayed_hour,
    };

    fn config(use_24h_format: bool, hide_leading_zero_24h: bool) -> DisplayConfig {
        DisplayConfig {
            use_24h_format,
            hide_leading_zero_24h,
            ..DisplayConfig::DEFAULT
        }
    }

    fn at(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_time_of_day_validation() {
        assert_eq!(TimeOfDay::new(24, 0), Err(InvalidTime::Hour(24)));
        assert_eq!(TimeOfDay::new(0, 60), Err(InvalidTime::Minute(60)));
        let time = at(23, 59);
        assert_eq!((time.hour(), time.minute()), (23, 59));
    }

    #[test]
    fn test_displayed_hour_12h() {
        let expected = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        for (hour, shown) in expected.into_iter().enumerate() {
            assert_eq!(displayed_hour(hour as u8, false), shown, "hour {hour}");
            assert_eq!(displayed_hour(hour as u8, true), hour as u8);
        }
    }

    #[test]
    fn test_12h_suppression() {
        let cfg = config(false, false);

        let midnight = decompose(at(0, 0), &cfg);
        assert_eq!((midnight.hour_tens, midnight.hour_units), (1, 2));
        assert!(!midnight.suppress_hour_tens);

        let noon = decompose(at(12, 0), &cfg);
        assert_eq!((noon.hour_tens, noon.hour_units), (1, 2));
        assert!(!noon.suppress_hour_tens);

        let one_pm = decompose(at(13, 0), &cfg);
        assert_eq!(one_pm.hour_units, 1);
        assert!(one_pm.suppress_hour_tens);

        let ten_pm = decompose(at(22, 0), &cfg);
        assert_eq!((ten_pm.hour_tens, ten_pm.hour_units), (1, 0));
        assert!(!ten_pm.suppress_hour_tens);

        for hour in 0..24u8 {
            let digits = decompose(at(hour, 0), &cfg);
            let shown = displayed_hour(hour, false);
            assert_eq!(digits.suppress_hour_tens, shown < 10, "hour {hour}");
        }
    }

    #[test]
    fn test_12h_ignores_leading_zero_setting() {
        assert_eq!(
            decompose(at(15, 30), &config(false, true)),
            decompose(at(15, 30), &config(false, false))
        );
    }

    #[test]
    fn test_24h_hide_leading_zero() {
        let cfg = config(true, true);
        assert!(decompose(at(5, 0), &cfg).suppress_hour_tens);
        assert!(decompose(at(0, 0), &cfg).suppress_hour_tens);
        assert!(!decompose(at(15, 0), &cfg).suppress_hour_tens);
    }

    #[test]
    fn test_24h_show_leading_zero() {
        let cfg = config(true, false);
        for hour in 0..24u8 {
            let digits = decompose(at(hour, 0), &cfg);
            assert!(!digits.suppress_hour_tens, "hour {hour}");
            assert_eq!(digits.hour_tens * 10 + digits.hour_units, hour);
        }
    }

    #[test]
    fn test_minutes_always_two_digits() {
        let digits = decompose(at(14, 7), &config(false, false));
        assert_eq!(
            digits,
            DigitSet {
                hour_tens: 0,
                hour_units: 2,
                minute_tens: 0,
                minute_units: 7,
                suppress_hour_tens: true,
            }
        );

        let digits = decompose(at(9, 59), &config(true, true));
        assert_eq!((digits.minute_tens, digits.minute_units), (5, 9));
    }
}
