//! Extended boot-sequence effects
//!
//! Same contract as the core set: one pass over the frame duration, pure in
//! `elapsed / duration` except where the random source is part of the look
//! (glitch, warp speed).

use crate::{
    color::{
        BLACK, Hsv, Rgb, add_colors, blend_colors, fade_to_black_by, fill_gradient_rgb,
        fill_solid, heat_color, hsv2rgb, scale_color,
    },
    frame::WelcomeFrame,
    math8::{beatsin8, beatsin16, cos8, cubicwave8, map_range, sin8, triwave8, value_noise2},
    rng::Rng8,
};

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Hue endpoints for the cyberwave sweep, magenta to cyan
const CYBERWAVE_HUE_A: u8 = 213;
const CYBERWAVE_HUE_B: u8 = 128;

/// Battery-charge look: a dark-to-color1 gradient creeping up the strip
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn charging(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let filled = map_range(i64::from(frame.progress8()), 0, 255, 0, len as i64) as usize;

    fill_solid(leds, BLACK);
    fill_gradient_rgb(&mut leds[..filled], BLACK, frame.color1);
}

/// Random white interference bars over a decaying field
#[allow(clippy::cast_possible_truncation)]
pub(super) fn glitch(_frame: &WelcomeFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 20);

    let len = leds.len();
    if rng.chance(50) {
        let start = rng.below(len as u16) as usize;
        let run = 1 + rng.below((len / 4).max(1) as u16) as usize;
        let end = (start + run).min(len);
        fill_solid(&mut leds[start..end], WHITE);
    }
}

/// Single ping travelling out once, leaving a decaying wake
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn sonar(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 40);

    let len = leds.len();
    let pos = map_range(i64::from(frame.progress8()), 0, 255, 0, (len - 1) as i64) as usize;
    leds[pos] = frame.color1;
}

/// Flame-temperature ramp igniting from the start of the strip
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn burning(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let lit = map_range(i64::from(frame.progress8()), 0, 255, 0, len as i64) as usize;

    fill_solid(leds, BLACK);
    for (i, led) in leds.iter_mut().enumerate().take(lit) {
        let temperature = map_range(i as i64, 0, len as i64, 0, 255) as u8;
        *led = heat_color(temperature);
    }
}

/// Star-field streaks: short-lived white sparks over fast decay
#[allow(clippy::cast_possible_truncation)]
pub(super) fn warp_speed(_frame: &WelcomeFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 20);

    let len = leds.len() as u16;
    for _ in 0..5 {
        let pos = rng.below(len) as usize;
        leds[pos] = WHITE;
    }
}

/// Double helix: two strands a quarter cycle apart in color1 and color2
#[allow(clippy::cast_possible_truncation)]
pub(super) fn dna(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let t = frame.elapsed_ms() as u8;
    for (i, led) in leds.iter_mut().enumerate() {
        let angle = ((i * 10) as u8).wrapping_add(t);
        let strand1 = scale_color(frame.color1, sin8(angle));
        let strand2 = scale_color(frame.color2, cos8(angle));
        *led = blend_colors(strand1, strand2, 128);
    }
}

/// Hard single-pixel beam crossing the strip once
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn laser(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let pos = map_range(i64::from(frame.progress8()), 0, 255, 0, (len - 1) as i64) as usize;

    fill_solid(leds, BLACK);
    leds[pos] = frame.color1;
}

/// Whole-strip pulse at 120 bpm with a hard spike at the beat peak
pub(super) fn heartbeat(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let beat = beatsin8(120, 0, 255, frame.elapsed_ms(), 0);
    let level = if beat > 200 { 255 } else { beat };
    fill_solid(leds, scale_color(frame.color1, level));
}

/// Slow rolling color1 wave, like light through water
#[allow(clippy::cast_possible_truncation)]
pub(super) fn liquid(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let t = (frame.elapsed_ms() / 5) as u8;
    for (i, led) in leds.iter_mut().enumerate() {
        let wave = cubicwave8(((i * 20) as u8).wrapping_add(t));
        *led = scale_color(frame.color1, wave);
    }
}

/// Four independent hue-cycling spotlights gliding over the strip
#[allow(clippy::cast_possible_truncation)]
pub(super) fn spotlights(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 30);

    let ms = frame.elapsed_ms();
    let last = (leds.len() - 1) as u16;
    let light = hsv2rgb(Hsv {
        hue: (ms / 20) as u8,
        sat: 255,
        val: 255,
    });
    for i in 0..4u16 {
        let pos = beatsin16(15 + i * 2, 0, last, ms, i * 16384) as usize;
        leds[pos] = add_colors(leds[pos], light);
    }
}

/// Triangular blend front sweeping color2 over color1
#[allow(clippy::cast_possible_truncation)]
pub(super) fn dynamic_gradient_sweep(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let progress = frame.progress8();
    for (i, led) in leds.iter_mut().enumerate() {
        let offset = ((i * 256) / len) as u8;
        let mix = triwave8(progress.wrapping_add(offset));
        *led = blend_colors(frame.color1, frame.color2, mix);
    }
}

/// Progressive fill with a bright head pixel leading the front
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn sequential_startup_scan(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let filled = map_range(i64::from(frame.progress8()), 0, 255, 0, len as i64) as usize;

    fill_solid(leds, BLACK);
    fill_solid(&mut leds[..filled], scale_color(frame.color1, 160));
    if filled < len {
        leds[filled] = frame.color2;
    }
}

/// Three phase-shifted particles drifting like suspended fluid
#[allow(clippy::cast_possible_truncation)]
pub(super) fn fluid_particle_swirl(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 25);

    let ms = frame.elapsed_ms();
    let last = (leds.len() - 1) as u16;
    let colors = [frame.color1, frame.color2, frame.color3];
    for (i, color) in colors.iter().enumerate() {
        let i = i as u16;
        let pos = beatsin16(9 + i * 3, 0, last, ms, i * 21845) as usize;
        leds[pos] = add_colors(leds[pos], *color);
    }
}

/// Three full-strip pulses announcing the switch to ambient lighting
pub(super) fn ambient_sync_pulse(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let pulse = cubicwave8(frame.progress8().wrapping_mul(3));
    fill_solid(leds, scale_color(frame.color1, pulse));
}

/// Slow breath from color2 into color1 with a faint organic shimmer
#[allow(clippy::cast_possible_truncation)]
pub(super) fn bioluminescent_breath(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let breath = cubicwave8(frame.progress8());
    let t = (frame.elapsed_ms() / 8) & 0xFFFF;
    for (i, led) in leds.iter_mut().enumerate() {
        let shimmer = value_noise2((i * 24) as u32, t as u32);
        let base = blend_colors(frame.color2, frame.color1, breath);
        *led = scale_color(base, 192u8.saturating_add(shimmer / 4));
    }
}

/// Magenta-to-cyan wave sweep in the gamer-hardware palette
#[allow(clippy::cast_possible_truncation)]
pub(super) fn cyberwave(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let t = (frame.elapsed_ms() / 4) as u8;
    let a = hsv2rgb(Hsv {
        hue: CYBERWAVE_HUE_A,
        sat: 255,
        val: 255,
    });
    let b = hsv2rgb(Hsv {
        hue: CYBERWAVE_HUE_B,
        sat: 255,
        val: 255,
    });
    for (i, led) in leds.iter_mut().enumerate() {
        let wave = sin8(((i * 12) as u8).wrapping_add(t));
        *led = blend_colors(a, b, wave);
    }
}
