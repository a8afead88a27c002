//! Decay-based trailing effects
//!
//! Each frame darkens the whole strip by an effect-specific amount before
//! drawing the new head pixels, leaving a fading trail behind the motion.
//! The decay constants are part of each effect's look.

use crate::{
    color::{Hsv, Rgb, add_colors, fade_to_black_by, hsv2rgb, max_colors, rgb_from_u32, scale_color},
    frame::AmbientFrame,
    math8::{beatsin16, map_range, sin16, triwave8},
    rng::Rng8,
};

const MATRIX_GREEN: Rgb = rgb_from_u32(0x008000);

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn comet(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 64);

    let len = leds.len();
    let cycle = len as f32 + 15.0;
    let pos = libm::fmodf(frame.phase() as f32 * 0.5, cycle) as usize;
    if pos < len {
        leds[pos] = frame.color1;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(super) fn cylon_scanner(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 64);

    let len = leds.len() as i64;
    let wave = triwave8((frame.phase() / 2) as u8);
    let pos = map_range(i64::from(wave), 0, 255, 0, len - 4);
    if pos >= 0 && pos + 3 < len {
        for led in leds.iter_mut().skip(pos as usize).take(4) {
            *led = frame.color1;
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn meteor(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 128);

    let len = leds.len();
    let pos = frame.phase() as usize % (len * 2);
    if pos < len {
        leds[pos] = frame.color1;
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn sinelon(frame: &AmbientFrame, now_ms: u64, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 20);

    let last = (leds.len() - 1) as u16;
    let bpm = 13 * u16::from(frame.speed);
    let pos = beatsin16(bpm, 0, last, now_ms, 0) as usize;
    leds[pos] = add_colors(leds[pos], frame.color1);
}

/// Eight dots weaving in and out of phase, each with its own hue
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn juggle(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 20);

    let len = leds.len();
    for i in 0u16..8 {
        let angle = frame
            .phase()
            .wrapping_mul(u32::from(i) + 3)
            .wrapping_add(u32::from(i) * 10_000);
        let unit = (i32::from(sin16(angle as u16)) + 32768) as u32; // 0..=65535
        let pos = (unit as usize * (len - 1)) / 65535;
        let dot = hsv2rgb(Hsv {
            hue: (i * 32) as u8,
            sat: 255,
            val: 255,
        });
        leds[pos] = max_colors(leds[pos], dot);
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn larson_scanner(frame: &AmbientFrame, now_ms: u64, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 40);

    let len = leds.len();
    let bpm = 10 * u16::from(frame.speed);
    let pos = beatsin16(bpm, 0, len as u16, now_ms, 0) as usize;

    let dim = scale_color(frame.color1, 80);
    if pos > 0 {
        leds[pos - 1] = dim;
    }
    if pos < len {
        leds[pos] = frame.color1;
    }
    if pos + 1 < len {
        leds[pos + 1] = dim;
    }
}

/// Digital-rain trickle: sparks enter at pixel 0 and shift down the strip
pub(super) fn matrix(frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    if rng.chance(frame.speed) {
        leds[0] = MATRIX_GREEN;
    }
    for i in (1..leds.len()).rev() {
        leds[i] = leds[i - 1];
    }
    fade_to_black_by(leds, 20);
}
