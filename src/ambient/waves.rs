//! Phase-accumulating wave effects
//!
//! These hold animation phase across frames inside the effect instance, so
//! switching patterns and back starts them fresh instead of resuming a
//! process-global counter.

use embassy_time::Instant;

use crate::{
    color::{Hsv, Palette16, Rgb, add_colors, blend_colors, fade_to_black_by, hsv2rgb, rgb_from_u32, scale_color},
    frame::AmbientFrame,
    math8::{beatsin16, cos8},
    rng::Rng8,
};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        Palette16([
            $(rgb_from_u32($color)),*
        ])
    };
}

// Deep-water blues resolving into two different surf greens; the third
// palette is a darker open-water ramp used as the base layer.
#[allow(clippy::unreadable_literal)]
const PACIFICA_PALETTE_1: Palette16 = hex_palette![
    0x000507, 0x000409, 0x00030B, 0x00030D, 0x000210, 0x000212, 0x000114, 0x000117, 0x000019,
    0x00001C, 0x000026, 0x000031, 0x00003B, 0x000046, 0x14554B, 0x28AA50
];
#[allow(clippy::unreadable_literal)]
const PACIFICA_PALETTE_2: Palette16 = hex_palette![
    0x000507, 0x000409, 0x00030B, 0x00030D, 0x000210, 0x000212, 0x000114, 0x000117, 0x000019,
    0x00001C, 0x000026, 0x000031, 0x00003B, 0x000046, 0x0C5F52, 0x19B35A
];
#[allow(clippy::unreadable_literal)]
const PACIFICA_PALETTE_3: Palette16 = hex_palette![
    0x000208, 0x00030E, 0x000514, 0x00061A, 0x000820, 0x000927, 0x000B2D, 0x000C33, 0x000E3A,
    0x001041, 0x001248, 0x00144F, 0x001656, 0x00185D, 0x001A64, 0x001C6B
];

/// Rotating hue wheel stretched over the strip
#[derive(Debug, Clone, Default)]
pub struct PrideEffect {
    pseudotime: u16,
}

impl PrideEffect {
    pub const fn new() -> Self {
        Self { pseudotime: 0 }
    }

    pub(super) fn reset(&mut self) {
        self.pseudotime = 0;
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn render(&mut self, frame: &AmbientFrame, leds: &mut [Rgb]) {
        self.pseudotime = self.pseudotime.wrapping_add(u16::from(frame.speed) * 8);

        let len = leds.len();
        let base = (self.pseudotime / 256) as usize;
        for (i, led) in leds.iter_mut().enumerate() {
            let hue = ((i * 256 / len) + base) as u8;
            *led = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 255,
            });
        }
    }
}

/// Layered ocean-wave effect
///
/// Two counter-drifting palette layers are blended by a phase-shifted
/// cosine, over a faint deep-water base layer. The phase counters advance
/// by real elapsed time scaled by slow sine oscillators, so wave speed
/// breathes independently of frame rate.
#[derive(Debug, Clone, Default)]
pub struct PacificaEffect {
    phase1: u16,
    phase2: u16,
    last_ms: Option<u64>,
}

impl PacificaEffect {
    pub const fn new() -> Self {
        Self {
            phase1: 0,
            phase2: 0,
            last_ms: None,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let ms = now.as_millis();
        let delta_ms = ms.saturating_sub(self.last_ms.unwrap_or(ms));
        self.last_ms = Some(ms);

        let speed1 = beatsin16(3, 179, 269, ms, 0);
        let speed2 = beatsin16(4, 179, 269, ms, 0);
        self.phase1 = self
            .phase1
            .wrapping_add(((delta_ms * u64::from(speed1)) / 256) as u16);
        self.phase2 = self
            .phase2
            .wrapping_sub(((delta_ms * u64::from(speed2)) / 256) as u16);

        let c1 = PACIFICA_PALETTE_1.sample((self.phase1 >> 8) as u8);
        let c2 = PACIFICA_PALETTE_2.sample((self.phase2 >> 8) as u8);
        let deep = PACIFICA_PALETTE_3.sample((self.phase1.wrapping_add(self.phase2) >> 8) as u8);
        let base = scale_color(deep, 48);

        let mut wave_angle = self.phase1.wrapping_sub(self.phase2);
        for led in leds {
            let mix = blend_colors(c1, c2, cos8(wave_angle as u8));
            *led = add_colors(mix, base);
            wave_angle = wave_angle.wrapping_add(25);
        }
    }
}

/// Expanding ring from a randomly re-seeded center
#[derive(Debug, Clone, Default)]
pub struct RippleEffect {
    center: usize,
    step: Option<usize>,
}

impl RippleEffect {
    pub const fn new() -> Self {
        Self {
            center: 0,
            step: None,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn render(&mut self, frame: &AmbientFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
        fade_to_black_by(leds, 10);

        let len = leds.len();
        // speed >= 1, so the period is always at least 1
        let period = 256 / u32::from(frame.speed);
        if u32::from(frame.anim_step) % period == 0 {
            self.center = rng.below(len as u16) as usize;
        }

        let step = self.step.unwrap_or(0);
        if step < len {
            let falloff = (step as u32 * (256 / len as u32)).min(255) as u8;
            let intensity = 255 - falloff;
            let ring = scale_color(frame.color1, intensity);

            if self.center + step < len {
                let i = self.center + step;
                leds[i] = add_colors(leds[i], ring);
            }
            if let Some(i) = self.center.checked_sub(step) {
                leds[i] = add_colors(leds[i], ring);
            }
            self.step = Some(step + 1);
        } else {
            self.step = None;
        }
    }
}
