mod hex;

pub use hex::{ColorParseError, parse_hex_rgb};
use smart_leds::RGB8;

use crate::math8::scale8;

pub type Rgb = RGB8;

/// Unlit element
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale every channel of a color by `brightness` (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_rgb(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}
