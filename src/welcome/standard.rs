//! Core boot-sequence effects
//!
//! Each runs exactly once over the frame's duration and is a pure function
//! of `elapsed / duration`, so irregular frame timing never desynchronizes
//! the choreography.

use crate::{
    bounds::center_of,
    color::{
        BLACK, Rgb, blend_colors, fade_to_black_by, fill_rainbow, fill_solid, rgb_from_u32,
    },
    frame::WelcomeFrame,
    math8::{map_range, triwave8},
};

const IGNITION_ORANGE: Rgb = rgb_from_u32(0xFFA500);
const CHASE_BLUE: Rgb = rgb_from_u32(0x0000FF);

/// Single dot sweeping out to the end and back
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn power_on_scan(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 40);

    let len = leds.len();
    let wave = triwave8(frame.progress8());
    let pos = map_range(i64::from(wave), 0, 255, 0, (len - 1) as i64) as usize;
    leds[pos] = frame.color1;
}

/// Orange burst growing outward from the strip center
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn ignition_burst(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let mid = center_of(leds);
    let reach = map_range(
        i64::from(frame.progress8()),
        0,
        255,
        0,
        (len / 2 + 1) as i64,
    ) as usize;

    fill_solid(leds, BLACK);
    let start = mid.saturating_sub(reach);
    let end = (mid + reach).min(len);
    fill_solid(&mut leds[start..end], IGNITION_ORANGE);
}

/// Full rainbow that resolves into the configured color over the second
/// half of the sequence
#[allow(clippy::cast_possible_truncation)]
pub(super) fn spectrum_resolve(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let progress = frame.progress8();
    let hue_delta = (256 / leds.len().max(1)) as u8;
    fill_rainbow(leds, progress, hue_delta);

    if progress > 127 {
        let resolve = (progress - 128).saturating_mul(2);
        for led in leds {
            *led = blend_colors(*led, frame.color1, resolve);
        }
    }
}

/// Blue fill closing in from both ends of the strip
///
/// Dark at the start, fully lit when the sequence completes. An odd strip
/// keeps its center pixel dark.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn theater_chase(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let reach = map_range(i64::from(frame.progress8()), 0, 255, 0, (len / 2) as i64) as usize;

    fill_solid(leds, BLACK);
    fill_solid(&mut leds[..reach], CHASE_BLUE);
    fill_solid(&mut leds[len - reach..], CHASE_BLUE);
}

/// Two comets leaving the center in opposite directions
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn dual_comet(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 64);

    let len = leds.len();
    let mid = center_of(leds);
    let reach = map_range(i64::from(frame.progress8()), 0, 255, 0, mid as i64) as usize;

    if let Some(i) = mid.checked_sub(reach + 1) {
        leds[i] = frame.color1;
    }
    if mid + reach < len {
        leds[mid + reach] = frame.color2;
    }
}

/// Solid fill growing symmetrically from the center
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn center_fill(frame: &WelcomeFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let mid = center_of(leds);
    let fill = map_range(i64::from(frame.progress8()), 0, 255, 0, mid as i64) as usize;

    fill_solid(leds, BLACK);
    let start = mid.saturating_sub(fill);
    let end = (mid + fill).min(len);
    fill_solid(&mut leds[start..end], frame.color1);
}
