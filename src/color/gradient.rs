use crate::color::Rgb;

/// Fill a linear RGB-space gradient using 8.8 fixed-point accumulators
///
/// Each channel walks from `start` to `end` independently; the accumulator
/// keeps 8 fractional bits so long strips stay smooth.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn fill_gradient_rgb(leds: &mut [Rgb], start: Rgb, end: Rgb) {
    if leds.is_empty() {
        return;
    }

    let divisor = leds.len().saturating_sub(1).max(1) as i32;
    let delta = |from: u8, to: u8| ((i32::from(to) - i32::from(from)) << 8) / divisor;

    let r_delta = delta(start.r, end.r);
    let g_delta = delta(start.g, end.g);
    let b_delta = delta(start.b, end.b);

    let mut r88 = i32::from(start.r) << 8;
    let mut g88 = i32::from(start.g) << 8;
    let mut b88 = i32::from(start.b) << 8;

    for led in leds {
        *led = Rgb {
            r: (r88 >> 8).clamp(0, 255) as u8,
            g: (g88 >> 8).clamp(0, 255) as u8,
            b: (b88 >> 8).clamp(0, 255) as u8,
        };
        r88 += r_delta;
        g88 += g_delta;
        b88 += b_delta;
    }
}

/// Fill a three-stop RGB gradient: `c1` at the start, `c2` at the middle,
/// `c3` at the end
pub fn fill_gradient_three_rgb(leds: &mut [Rgb], c1: Rgb, c2: Rgb, c3: Rgb) {
    if leds.is_empty() {
        return;
    }

    let half = leds.len() / 2;
    let (first, second) = leds.split_at_mut(half);
    fill_gradient_rgb(first, c1, c2);
    fill_gradient_rgb(second, c2, c3);
}
