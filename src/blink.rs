//! Separator blink state

/// Toggle driving the separator indicator
///
/// Advanced once per cadence tick regardless of configuration; the
/// configuration only decides whether the value is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkState {
    lit: bool,
}

impl BlinkState {
    /// Starts lit
    pub const fn new() -> Self {
        Self { lit: true }
    }

    pub fn advance(&mut self) {
        self.lit = !self.lit;
    }

    pub const fn value(self) -> bool {
        self.lit
    }
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the separator is lit for a given blink value.
///
/// With blinking disabled the separator stays on.
pub const fn indicator_lit(blink_separator: bool, blink: bool) -> bool {
    !blink_separator || blink
}
