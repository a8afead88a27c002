//! Whole-strip fills and wipes

use crate::{
    color::{BLACK, Hsv, Rgb, fill_gradient_three_rgb, fill_rainbow, fill_solid, hsv2rgb, scale_color},
    frame::AmbientFrame,
    math8::{map_range, sin8, triwave8},
};

pub(super) fn solid(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fill_solid(leds, frame.color1);
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn breathing(frame: &AmbientFrame, leds: &mut [Rgb]) {
    let scale = sin8(frame.phase() as u8);
    fill_solid(leds, scale_color(frame.color1, scale));
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow(frame: &AmbientFrame, leds: &mut [Rgb]) {
    let hue_delta = (256 / leds.len()) as u8;
    fill_rainbow(leds, frame.phase() as u8, hue_delta);
}

pub(super) fn gradient_shift(frame: &AmbientFrame, leds: &mut [Rgb]) {
    fill_gradient_three_rgb(leds, frame.color1, frame.color2, frame.color3);
}

pub(super) fn theater_chase(frame: &AmbientFrame, leds: &mut [Rgb]) {
    let cycle = (frame.phase() / 32) as usize;
    for (i, led) in leds.iter_mut().enumerate() {
        *led = if (i + cycle) % 4 == 0 {
            frame.color1
        } else {
            BLACK
        };
    }
}

/// Progressive wipe: color1 grows from the start of the strip over color2,
/// then holds at full color1 for the second half of the cycle
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(super) fn color_wipe(frame: &AmbientFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let pos = map_range(i64::from(frame.phase()), 0, 65535, 0, (len * 2) as i64);

    if pos < len as i64 {
        let pos = pos.max(0) as usize;
        fill_solid(&mut leds[..pos], frame.color1);
        fill_solid(&mut leds[pos..], frame.color2);
    } else {
        fill_solid(leds, frame.color1);
    }
}

/// Ping-pong wipe between color1 and color2
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(super) fn two_color_wipe(frame: &AmbientFrame, leds: &mut [Rgb]) {
    let len = leds.len();
    let wave = triwave8((frame.phase() / 16) as u8);
    let pos = map_range(i64::from(wave), 0, 255, 0, len as i64);

    for (i, led) in leds.iter_mut().enumerate() {
        *led = if (i as i64) <= pos {
            frame.color1
        } else {
            frame.color2
        };
    }
}

/// Per-pixel coherent noise mapped to hue
#[allow(clippy::cast_possible_truncation)]
pub(super) fn noise(frame: &AmbientFrame, leds: &mut [Rgb]) {
    for (i, led) in leds.iter_mut().enumerate() {
        let hue = crate::math8::value_noise2((i * 20) as u32, frame.phase() & 0xFFFF);
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
    }
}
