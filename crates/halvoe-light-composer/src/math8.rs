//! 8-bit fixed point helpers
//!
//! Integer versions of the usual LED math, so nothing on the render path
//! needs floating point.

use rand_core::RngCore;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * u16::from(scale)) >> 8) as u8
}

/// Scale an 8-bit value, never scaling a non-zero value down to zero
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((u16::from(value) * u16::from(scale)) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Saturating add
#[inline]
pub fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating subtract
#[inline]
pub fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Linearly re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// The result is truncated toward zero and not clamped; values outside the
/// input range extrapolate. A degenerate input range maps to `out_min`.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Clamp an integer into the 8-bit channel range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Random byte
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8<R: RngCore>(rng: &mut R) -> u8 {
    (rng.next_u32() >> 24) as u8
}

/// Random byte in `[0, lim)`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8_lim<R: RngCore>(rng: &mut R, lim: u8) -> u8 {
    ((u16::from(random8(rng)) * u16::from(lim)) >> 8) as u8
}

/// Random byte in `[min, lim)`
#[inline]
pub fn random8_range<R: RngCore>(rng: &mut R, min: u8, lim: u8) -> u8 {
    min + random8_lim(rng, lim.saturating_sub(min))
}
