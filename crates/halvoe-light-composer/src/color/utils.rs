use crate::color::Rgb;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Scale every channel of a color by a brightness level
///
/// `channel * level / 255` truncated, so level 255 keeps the color and a red
/// of 255 at level 128 becomes 128.
#[inline]
pub fn scale_rgb(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale_level(color.r, level),
        g: scale_level(color.g, level),
        b: scale_level(color.b, level),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn scale_level(value: u8, level: u8) -> u8 {
    (u16::from(value) * u16::from(level) / 255) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
