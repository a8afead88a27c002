//! Turn-signal effect library
//!
//! Directional indicator patterns paced by the wall clock. All four effects
//! are pure functions of `now` and the frame parameters, so left and right
//! channels stay in lockstep when driven from the same clock.

use embassy_time::Instant;

use crate::{
    color::{Rgb, fade_to_black_by, fill_solid},
    frame::TurnSignalFrame,
};

const EFFECT_NAME_SEQUENTIAL: &str = "sequential";
const EFFECT_NAME_PULSING_ARROW: &str = "pulsing_arrow";
const EFFECT_NAME_FILL_AND_FLUSH: &str = "fill_and_flush";
const EFFECT_NAME_COMET_TRAIL: &str = "comet_trail";

/// Off-time appended after a sequential sweep, in animation steps
const SEQUENTIAL_GAP_STEPS: u64 = 5;
/// Extra run-out past the strip end for the comet trail, in pixels
const COMET_TRAIL_RUNOUT: f32 = 10.0;
/// Pulsing-arrow half period
const PULSE_HALF_PERIOD_MS: u64 = 500;

/// Known turn-signal effect ids that can be requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TurnSignalEffectId {
    Sequential = 0,
    PulsingArrow = 1,
    FillAndFlush = 2,
    CometTrail = 3,
}

impl TurnSignalEffectId {
    /// Number of turn-signal effect modes
    pub const COUNT: u8 = 4;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Sequential,
            1 => Self::PulsingArrow,
            2 => Self::FillAndFlush,
            3 => Self::CometTrail,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => EFFECT_NAME_SEQUENTIAL,
            Self::PulsingArrow => EFFECT_NAME_PULSING_ARROW,
            Self::FillAndFlush => EFFECT_NAME_FILL_AND_FLUSH,
            Self::CometTrail => EFFECT_NAME_COMET_TRAIL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..Self::COUNT)
            .filter_map(Self::from_raw)
            .find(|id| id.as_str() == s)
    }

    /// Render one frame into `leds`. A zero-length buffer is a no-op.
    pub fn render(self, now: Instant, frame: &TurnSignalFrame, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let ms = now.as_millis();
        match self {
            Self::Sequential => sequential(ms, frame, leds),
            Self::PulsingArrow => pulsing_arrow(ms, frame, leds),
            Self::FillAndFlush => fill_and_flush(ms, frame, leds),
            Self::CometTrail => comet_trail(ms, frame, leds),
        }
    }
}

/// Progressive fill toward the strip end, then an off gap before repeating
#[allow(clippy::cast_possible_truncation)]
fn sequential(ms: u64, frame: &TurnSignalFrame, leds: &mut [Rgb]) {
    let len = leds.len() as u64;
    let pos = (ms / frame.step_ms()) % (len + SEQUENTIAL_GAP_STEPS);

    fill_solid(leds, Rgb::default());
    if pos <= len {
        fill_solid(&mut leds[..pos as usize], frame.color);
    }
}

/// Plain blinker: on for half a second, off for half a second
fn pulsing_arrow(ms: u64, frame: &TurnSignalFrame, leds: &mut [Rgb]) {
    let on = (ms / PULSE_HALF_PERIOD_MS) % 2 == 1;
    fill_solid(leds, if on { frame.color } else { Rgb::default() });
}

/// Fill the strip one pixel per step, hold nothing, then a dark flush cycle
#[allow(clippy::cast_possible_truncation)]
fn fill_and_flush(ms: u64, frame: &TurnSignalFrame, leds: &mut [Rgb]) {
    let len = leds.len() as u64;
    let step = frame.step_ms();
    let cycle = ms / (step * len);

    fill_solid(leds, Rgb::default());
    if cycle % 2 == 0 {
        let filled = (ms / step) % len + 1;
        fill_solid(&mut leds[..filled as usize], frame.color);
    }
}

/// Single bright head sweeping off the end with a decaying trail
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn comet_trail(ms: u64, frame: &TurnSignalFrame, leds: &mut [Rgb]) {
    fade_to_black_by(leds, 40);

    let len = leds.len();
    let half_step = frame.step_ms() as f32 * 0.5;
    let pos = libm::fmodf(ms as f32 / half_step, len as f32 + COMET_TRAIL_RUNOUT) as usize;
    if pos < len {
        leds[pos] = frame.color;
    }
}
