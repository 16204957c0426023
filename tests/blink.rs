mod tests {
    use myrtio_segment_clock::BlinkState;
    use myrtio_segment_clock::blink::indicator_lit;

    #[test]
    fn test_starts_lit() {
        assert!(BlinkState::new().value());
        assert_eq!(BlinkState::default(), BlinkState::new());
    }

    #[test]
    fn test_parity_after_ticks() {
        let mut blink = BlinkState::new();
        for ticks in 1..=10 {
            blink.advance();
            assert_eq!(blink.value(), ticks % 2 == 0, "after {ticks} ticks");
        }
    }

    #[test]
    fn test_indicator_gating() {
        assert!(indicator_lit(true, true));
        assert!(!indicator_lit(true, false));
        assert!(indicator_lit(false, true));
        assert!(indicator_lit(false, false));
    }
}
