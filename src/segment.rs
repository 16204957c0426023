//! Seven-segment digit encoding
//!
//! Digits are stored as 7-bit masks, most significant bit first. Each bit
//! position is routed through a per-strip order table to the physical
//! element it drives, because the hour and minute strings are wired
//! differently.

/// Number of segments in one digit
pub const SEGMENT_COUNT: usize = 7;

/// Digit shapes for the hour string
const HOUR_DIGIT_MASKS: [u8; 10] = [
    0b111_1110, 0b011_0000, 0b110_1101, 0b111_1001, 0b011_0011,
    0b101_1011, 0b101_1111, 0b111_0000, 0b111_1111, 0b111_1011,
];

/// Digit shapes for the minute string
const MINUTE_DIGIT_MASKS: [u8; 10] = [
    0b111_0111, 0b001_0010, 0b101_1101, 0b101_1011, 0b011_1010,
    0b110_1011, 0b110_1111, 0b101_0010, 0b111_1111, 0b111_1011,
];

/// Element offset (within a digit slot) driven by each mask bit
const HOUR_SEGMENT_ORDER: [u8; SEGMENT_COUNT] = [1, 0, 4, 5, 6, 2, 3];
const MINUTE_SEGMENT_ORDER: [u8; SEGMENT_COUNT] = [5, 4, 6, 3, 0, 2, 1];

/// Which physical string a digit is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripRole {
    Hour,
    Minute,
}

impl StripRole {
    const fn digit_masks(self) -> &'static [u8; 10] {
        match self {
            Self::Hour => &HOUR_DIGIT_MASKS,
            Self::Minute => &MINUTE_DIGIT_MASKS,
        }
    }

    const fn segment_order(self) -> &'static [u8; SEGMENT_COUNT] {
        match self {
            Self::Hour => &HOUR_SEGMENT_ORDER,
            Self::Minute => &MINUTE_SEGMENT_ORDER,
        }
    }
}

/// Position of a digit within a two-digit strip
///
/// Element 0 belongs to the separator indicator. The hour string carries its
/// units digit in the low slot, the minute string its tens digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DigitSlot {
    /// Elements 1..=7
    Low = 1,
    /// Elements 8..=14
    High = 8,
}

impl DigitSlot {
    /// First physical element of the slot
    pub const fn base(self) -> usize {
        self as usize
    }
}

/// Segment states of one digit for one strip role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPattern {
    role: StripRole,
    states: [bool; SEGMENT_COUNT],
}

impl SegmentPattern {
    /// Segment states in mask order (most significant bit first)
    pub const fn states(&self) -> [bool; SEGMENT_COUNT] {
        self.states
    }

    pub const fn role(&self) -> StripRole {
        self.role
    }

    /// Physical elements of `slot` paired with their lit state
    pub fn elements(&self, slot: DigitSlot) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.role
            .segment_order()
            .iter()
            .zip(self.states)
            .map(move |(&offset, on)| (slot.base() + usize::from(offset), on))
    }

    /// Physical elements of `slot` that are lit
    pub fn lit_elements(&self, slot: DigitSlot) -> impl Iterator<Item = usize> + '_ {
        self.elements(slot)
            .filter_map(|(index, on)| on.then_some(index))
    }
}

/// Encode a decimal digit for the given strip role.
///
/// Digits above 9 are a caller bug: they panic in debug builds and are
/// clamped to 9 otherwise.
pub fn encode(digit: u8, role: StripRole) -> SegmentPattern {
    debug_assert!(digit <= 9, "digit out of range: {digit}");
    let mask = role.digit_masks()[usize::from(digit.min(9))];

    let mut states = [false; SEGMENT_COUNT];
    for (bit, state) in states.iter_mut().enumerate() {
        *state = (mask >> (SEGMENT_COUNT - 1 - bit)) & 1 == 1;
    }

    SegmentPattern { role, states }
}
