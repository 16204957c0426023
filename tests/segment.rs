mod tests {
    use myrtio_segment_clock::segment::{DigitSlot, SEGMENT_COUNT, StripRole, encode};

    const HOUR_LIT_OFFSETS: [&[usize]; 10] = [
        &[0, 1, 2, 4, 5, 6],
        &[0, 4],
        &[0, 1, 3, 5, 6],
        &[0, 1, 3, 4, 5],
        &[0, 2, 3, 4],
        &[1, 2, 3, 4, 5],
        &[1, 2, 3, 4, 5, 6],
        &[0, 1, 4],
        &[0, 1, 2, 3, 4, 5, 6],
        &[0, 1, 2, 3, 4, 5],
    ];

    const MINUTE_LIT_OFFSETS: [&[usize]; 10] = [
        &[0, 1, 2, 4, 5, 6],
        &[2, 6],
        &[0, 1, 3, 5, 6],
        &[1, 2, 3, 5, 6],
        &[2, 3, 4, 6],
        &[1, 2, 3, 4, 5],
        &[0, 1, 2, 3, 4, 5],
        &[2, 5, 6],
        &[0, 1, 2, 3, 4, 5, 6],
        &[1, 2, 3, 4, 5, 6],
    ];

    fn lit_offsets(digit: u8, role: StripRole) -> Vec<usize> {
        let mut lit: Vec<usize> = encode(digit, role)
            .lit_elements(DigitSlot::Low)
            .map(|index| index - DigitSlot::Low.base())
            .collect();
        lit.sort_unstable();
        lit
    }

    #[test]
    fn test_hour_digits() {
        for (digit, expected) in HOUR_LIT_OFFSETS.iter().enumerate() {
            assert_eq!(
                lit_offsets(digit as u8, StripRole::Hour),
                *expected,
                "hour digit {digit}"
            );
        }
    }

    #[test]
    fn test_minute_digits() {
        for (digit, expected) in MINUTE_LIT_OFFSETS.iter().enumerate() {
            assert_eq!(
                lit_offsets(digit as u8, StripRole::Minute),
                *expected,
                "minute digit {digit}"
            );
        }
    }

    #[test]
    fn test_roles_use_distinct_wiring() {
        assert_ne!(lit_offsets(1, StripRole::Hour), lit_offsets(1, StripRole::Minute));
        assert_ne!(lit_offsets(7, StripRole::Hour), lit_offsets(7, StripRole::Minute));
    }

    #[test]
    fn test_pattern_covers_every_segment_once() {
        for role in [StripRole::Hour, StripRole::Minute] {
            let pattern = encode(8, role);
            assert_eq!(pattern.states(), [true; SEGMENT_COUNT]);

            let mut indices: Vec<usize> = pattern.elements(DigitSlot::High).map(|(i, _)| i).collect();
            indices.sort_unstable();
            assert_eq!(indices, (8..15).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_mask_bits_most_significant_first() {
        // Hour "1" is 0b0110000
        assert_eq!(
            encode(1, StripRole::Hour).states(),
            [false, true, true, false, false, false, false]
        );
    }

    #[test]
    fn test_slot_bases() {
        assert_eq!(DigitSlot::Low.base(), 1);
        assert_eq!(DigitSlot::High.base(), 8);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "digit out of range")]
    fn test_invalid_digit_panics_in_debug() {
        let _ = encode(10, StripRole::Hour);
    }
}
