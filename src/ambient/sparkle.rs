//! Random spark effects driven by the caller-owned RNG

use crate::{
    color::{
        BLACK, Hsv, Rgb, add_colors, blend_colors, fade_to_black_by, fill_solid, heat_color,
        hsv2rgb, scale_color,
    },
    frame::AmbientFrame,
    math8::{map_range, sin8},
    rng::Rng8,
};

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

#[allow(clippy::cast_possible_truncation)]
pub(super) fn twinkle(frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 40);

    if rng.chance(80) {
        let pos = rng.below(leds.len() as u16) as usize;
        leds[pos] = if rng.chance(128) {
            frame.color1
        } else {
            frame.color2
        };
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn confetti(frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 10);

    let pos = rng.below(leds.len() as u16) as usize;
    let hue = (frame.phase() as u8).wrapping_add(rng.below(64) as u8);
    let fleck = hsv2rgb(Hsv {
        hue,
        sat: 200,
        val: 255,
    });
    leds[pos] = add_colors(leds[pos], fleck);
}

/// Ember bed: everything cools toward black while random sparks flare up
/// at flame temperatures
#[allow(clippy::cast_possible_truncation)]
pub(super) fn fire(_frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    for led in leds.iter_mut() {
        *led = scale_color(*led, 192);
    }

    if rng.chance(80) {
        let pos = rng.below(leds.len() as u16) as usize;
        leds[pos] = heat_color(rng.range8(160, 255));
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn lightning(frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 100);

    if rng.chance(frame.speed) {
        let len = leds.len();
        let start = rng.below(len as u16) as usize;
        let bolt = rng.below((len - start) as u16) as usize;
        fill_solid(&mut leds[start..start + bolt], WHITE);
    }
}

/// Three jittering sine fields summed per pixel and mapped onto color1,
/// with a faint color2 wash on top
#[allow(clippy::cast_possible_truncation)]
pub(super) fn plasma_ball(frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    let phase = frame.phase();
    let p1 = sin8((phase as u8).wrapping_add(rng.random8()));
    let p2 = sin8((phase as u8).wrapping_add(rng.random8()).wrapping_add(128));
    let p3 = sin8(((phase * 2) as u8).wrapping_add(rng.random8()));

    let wash = scale_color(frame.color2, 32);
    for (i, led) in leds.iter_mut().enumerate() {
        let i = i as u32;
        let val = u16::from(sin8(((i * 10) as u8).wrapping_add(p1)))
            + u16::from(sin8(((i * 12) as u8).wrapping_add(p2)))
            + u16::from(sin8(((i * 14) as u8).wrapping_add(p3)));
        let level = map_range(i64::from(val), 0, 765, 0, 255) as u8;
        *led = add_colors(blend_colors(BLACK, frame.color1, level), wash);
    }
}
