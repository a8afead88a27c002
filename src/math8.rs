//! 8-bit fixed-point math helpers
//!
//! Fractions are expressed as `u8` where 255 means 1.0. Wave functions take
//! an angle where a full circle is 256 (or 65536 for the 16-bit variants).

use core::f32::consts::TAU;

use embassy_time::Duration;

/// Scale an 8-bit value by an 8-bit fraction (255 = 1.0)
#[inline]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Like [`scale8`], but a non-zero value scaled by a non-zero fraction
/// never drops to zero
#[inline]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 && scaled == 0 {
        1
    } else {
        scaled
    }
}

/// Blend `a` toward `b` by `amount_of_b` (0 = all a, 255 = all b)
#[inline]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let amount = amount_of_b as u16;
    ((a as u16 * (255 - amount) + b as u16 * amount) / 255) as u8
}

/// Normalized progress of `elapsed` through `total`, 0-255
pub const fn progress8(elapsed: Duration, total: Duration) -> u8 {
    let total_ms = total.as_millis();
    if total_ms == 0 {
        return 255;
    }
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms >= total_ms {
        return 255;
    }
    ((elapsed_ms * 255) / total_ms) as u8
}

/// Linearly re-map `value` from one range onto another
///
/// Out-of-range inputs extrapolate rather than clamp.
pub const fn map_range(value: i64, from_low: i64, from_high: i64, to_low: i64, to_high: i64) -> i64 {
    (value - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}

/// Triangle wave over one 256-step cycle, peaking at 254
pub const fn triwave8(x: u8) -> u8 {
    if x & 0x80 != 0 { (255 - x) << 1 } else { x << 1 }
}

/// Quadratic ease-in / ease-out
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj2 = scale8(j, j) << 1;
    if i & 0x80 != 0 { 255 - jj2 } else { jj2 }
}

/// Cubic ease-in / ease-out
pub const fn ease_in_out_cubic(i: u8) -> u8 {
    let ii = scale8(i, i);
    let iii = scale8(ii, i);
    let r = 3 * ii as u16 - 2 * iii as u16;
    if r > 255 { 255 } else { r as u8 }
}

/// One cycle of a cubic-eased triangle wave
pub const fn cubicwave8(x: u8) -> u8 {
    ease_in_out_cubic(triwave8(x))
}

/// Sine over a 256-step circle, rescaled to 0-255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(angle: u8) -> u8 {
    let radians = f32::from(angle) * TAU / 256.0;
    ((libm::sinf(radians) + 1.0) * 127.5) as u8
}

/// Cosine counterpart of [`sin8`]
pub fn cos8(angle: u8) -> u8 {
    sin8(angle.wrapping_add(64))
}

/// Sine over a 65536-step circle, full `i16` amplitude
#[allow(clippy::cast_possible_truncation)]
pub fn sin16(angle: u16) -> i16 {
    let radians = f32::from(angle) * TAU / 65536.0;
    (libm::sinf(radians) * 32767.0) as i16
}

/// Free-running sawtooth at `bpm` beats per minute; one beat spans the full
/// `u16` range
#[allow(clippy::cast_possible_truncation)]
pub const fn beat16(bpm: u16, time_ms: u64) -> u16 {
    ((time_ms * bpm as u64 * 65536) / 60_000) as u16
}

/// Sine oscillating between `low` and `high` at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, time_ms: u64, phase: u16) -> u16 {
    let beat = beat16(bpm, time_ms).wrapping_add(phase);
    let wave = (i32::from(sin16(beat)) + 32768) as u32; // 0..=65535
    let range = u32::from(high - low);
    low + (wave * range / 65535) as u16
}

/// 8-bit variant of [`beatsin16`]
#[allow(clippy::cast_possible_truncation)]
pub fn beatsin8(bpm: u16, low: u8, high: u8, time_ms: u64, phase: u8) -> u8 {
    let beat = (beat16(bpm, time_ms) >> 8) as u8;
    let wave = sin8(beat.wrapping_add(phase));
    low + scale8(wave, high - low)
}

const fn hash(value: u32) -> u32 {
    let mut x = value;
    x = (x ^ (x >> 16)).wrapping_mul(0x7feb_352d);
    x = (x ^ (x >> 15)).wrapping_mul(0x846c_a68b);
    x ^ (x >> 16)
}

const fn hash2(x: u32, y: u32) -> u8 {
    (hash(x.wrapping_mul(0x9e37_79b9) ^ y.wrapping_mul(0x85eb_ca6b)) >> 24) as u8
}

/// Smooth two-dimensional value noise
///
/// Coordinates are 8.8 fixed-point: the integer part selects a lattice
/// cell, the fraction interpolates between its corners with quadratic
/// easing. Output is deterministic for a given coordinate pair.
#[allow(clippy::cast_possible_truncation)]
pub fn value_noise2(x_fp: u32, y_fp: u32) -> u8 {
    let xi = x_fp >> 8;
    let yi = y_fp >> 8;
    let tx = ease_in_out_quad((x_fp & 0xFF) as u8);
    let ty = ease_in_out_quad((y_fp & 0xFF) as u8);

    let c00 = hash2(xi, yi);
    let c10 = hash2(xi.wrapping_add(1), yi);
    let c01 = hash2(xi, yi.wrapping_add(1));
    let c11 = hash2(xi.wrapping_add(1), yi.wrapping_add(1));

    let top = blend8(c00, c10, tx);
    let bottom = blend8(c01, c11, tx);
    blend8(top, bottom, ty)
}
