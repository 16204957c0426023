//! Hex color parsing
//!
//! The configuration store keeps the segment color as a `#RRGGBB` string.

use super::{Rgb, rgb_from_u32};

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input is not exactly six hex digits (after an optional `#`)
    InvalidLength,
    /// Input contains a character outside `0-9a-fA-F`
    InvalidDigit,
}

/// Parse `#RRGGBB` or `RRGGBB` into a color.
pub fn parse_hex_rgb(input: &str) -> Result<Rgb, ColorParseError> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit);
    }
    if digits.len() != 6 {
        return Err(ColorParseError::InvalidLength);
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit)?;
    Ok(rgb_from_u32(value))
}
