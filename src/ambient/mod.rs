//! Ambient effect library
//!
//! General-purpose idle patterns driven by a free-running animation step.
//! Effects with cross-frame state are stored in an enum slot to avoid heap
//! allocations; switching effects creates a fresh slot, so no pattern ever
//! resumes another pattern's leftover phase.

mod fills;
mod physics;
mod sparkle;
mod trails;
mod waves;

use embassy_time::Instant;

pub use physics::BouncingBallsEffect;
pub use waves::{PacificaEffect, PrideEffect, RippleEffect};

use crate::{color::Rgb, frame::AmbientFrame, rng::Rng8};

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_BREATHING: &str = "breathing";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_COMET: &str = "comet";
const EFFECT_NAME_CYLON_SCANNER: &str = "cylon_scanner";
const EFFECT_NAME_TWINKLE: &str = "twinkle";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_GRADIENT_SHIFT: &str = "gradient_shift";
const EFFECT_NAME_PLASMA_BALL: &str = "plasma_ball";
const EFFECT_NAME_THEATER_CHASE: &str = "theater_chase";
const EFFECT_NAME_COLOR_WIPE: &str = "color_wipe";
const EFFECT_NAME_PRIDE: &str = "pride";
const EFFECT_NAME_PACIFICA: &str = "pacifica";
const EFFECT_NAME_BOUNCING_BALLS: &str = "bouncing_balls";
const EFFECT_NAME_METEOR: &str = "meteor";
const EFFECT_NAME_CONFETTI: &str = "confetti";
const EFFECT_NAME_JUGGLE: &str = "juggle";
const EFFECT_NAME_SINELON: &str = "sinelon";
const EFFECT_NAME_NOISE: &str = "noise";
const EFFECT_NAME_MATRIX: &str = "matrix";
const EFFECT_NAME_RIPPLE: &str = "ripple";
const EFFECT_NAME_LARSON_SCANNER: &str = "larson_scanner";
const EFFECT_NAME_TWO_COLOR_WIPE: &str = "two_color_wipe";
const EFFECT_NAME_LIGHTNING: &str = "lightning";

/// Known ambient effect ids that can be requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AmbientEffectId {
    Solid = 0,
    Breathing = 1,
    Rainbow = 2,
    Comet = 3,
    CylonScanner = 4,
    Twinkle = 5,
    Fire = 6,
    GradientShift = 7,
    PlasmaBall = 8,
    TheaterChase = 9,
    ColorWipe = 10,
    Pride = 11,
    Pacifica = 12,
    BouncingBalls = 13,
    Meteor = 14,
    Confetti = 15,
    Juggle = 16,
    Sinelon = 17,
    Noise = 18,
    Matrix = 19,
    Ripple = 20,
    LarsonScanner = 21,
    TwoColorWipe = 22,
    Lightning = 23,
}

impl AmbientEffectId {
    /// Number of ambient effect modes
    pub const COUNT: u8 = 24;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Solid,
            1 => Self::Breathing,
            2 => Self::Rainbow,
            3 => Self::Comet,
            4 => Self::CylonScanner,
            5 => Self::Twinkle,
            6 => Self::Fire,
            7 => Self::GradientShift,
            8 => Self::PlasmaBall,
            9 => Self::TheaterChase,
            10 => Self::ColorWipe,
            11 => Self::Pride,
            12 => Self::Pacifica,
            13 => Self::BouncingBalls,
            14 => Self::Meteor,
            15 => Self::Confetti,
            16 => Self::Juggle,
            17 => Self::Sinelon,
            18 => Self::Noise,
            19 => Self::Matrix,
            20 => Self::Ripple,
            21 => Self::LarsonScanner,
            22 => Self::TwoColorWipe,
            23 => Self::Lightning,
            _ => return None,
        })
    }

    /// Create a fresh slot (with pristine internal state) for this effect
    pub fn to_slot(self) -> AmbientSlot {
        match self {
            Self::Solid => AmbientSlot::Solid,
            Self::Breathing => AmbientSlot::Breathing,
            Self::Rainbow => AmbientSlot::Rainbow,
            Self::Comet => AmbientSlot::Comet,
            Self::CylonScanner => AmbientSlot::CylonScanner,
            Self::Twinkle => AmbientSlot::Twinkle,
            Self::Fire => AmbientSlot::Fire,
            Self::GradientShift => AmbientSlot::GradientShift,
            Self::PlasmaBall => AmbientSlot::PlasmaBall,
            Self::TheaterChase => AmbientSlot::TheaterChase,
            Self::ColorWipe => AmbientSlot::ColorWipe,
            Self::Pride => AmbientSlot::Pride(PrideEffect::new()),
            Self::Pacifica => AmbientSlot::Pacifica(PacificaEffect::new()),
            Self::BouncingBalls => AmbientSlot::BouncingBalls(BouncingBallsEffect::new()),
            Self::Meteor => AmbientSlot::Meteor,
            Self::Confetti => AmbientSlot::Confetti,
            Self::Juggle => AmbientSlot::Juggle,
            Self::Sinelon => AmbientSlot::Sinelon,
            Self::Noise => AmbientSlot::Noise,
            Self::Matrix => AmbientSlot::Matrix,
            Self::Ripple => AmbientSlot::Ripple(RippleEffect::new()),
            Self::LarsonScanner => AmbientSlot::LarsonScanner,
            Self::TwoColorWipe => AmbientSlot::TwoColorWipe,
            Self::Lightning => AmbientSlot::Lightning,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Breathing => EFFECT_NAME_BREATHING,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Comet => EFFECT_NAME_COMET,
            Self::CylonScanner => EFFECT_NAME_CYLON_SCANNER,
            Self::Twinkle => EFFECT_NAME_TWINKLE,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::GradientShift => EFFECT_NAME_GRADIENT_SHIFT,
            Self::PlasmaBall => EFFECT_NAME_PLASMA_BALL,
            Self::TheaterChase => EFFECT_NAME_THEATER_CHASE,
            Self::ColorWipe => EFFECT_NAME_COLOR_WIPE,
            Self::Pride => EFFECT_NAME_PRIDE,
            Self::Pacifica => EFFECT_NAME_PACIFICA,
            Self::BouncingBalls => EFFECT_NAME_BOUNCING_BALLS,
            Self::Meteor => EFFECT_NAME_METEOR,
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::Sinelon => EFFECT_NAME_SINELON,
            Self::Noise => EFFECT_NAME_NOISE,
            Self::Matrix => EFFECT_NAME_MATRIX,
            Self::Ripple => EFFECT_NAME_RIPPLE,
            Self::LarsonScanner => EFFECT_NAME_LARSON_SCANNER,
            Self::TwoColorWipe => EFFECT_NAME_TWO_COLOR_WIPE,
            Self::Lightning => EFFECT_NAME_LIGHTNING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..Self::COUNT)
            .filter_map(Self::from_raw)
            .find(|id| id.as_str() == s)
    }
}

/// Ambient effect slot - one variant per effect, stateful effects carry
/// their own accumulators
#[derive(Debug, Clone)]
pub enum AmbientSlot {
    Solid,
    Breathing,
    Rainbow,
    Comet,
    CylonScanner,
    Twinkle,
    Fire,
    GradientShift,
    PlasmaBall,
    TheaterChase,
    ColorWipe,
    Pride(PrideEffect),
    Pacifica(PacificaEffect),
    BouncingBalls(BouncingBallsEffect),
    Meteor,
    Confetti,
    Juggle,
    Sinelon,
    Noise,
    Matrix,
    Ripple(RippleEffect),
    LarsonScanner,
    TwoColorWipe,
    Lightning,
}

impl Default for AmbientSlot {
    fn default() -> Self {
        Self::Solid
    }
}

impl AmbientSlot {
    /// Render one frame into `leds`
    ///
    /// `now` feeds the wall-clock-paced effects (pacifica, bouncing balls,
    /// the beat oscillators); `rng` feeds the sparkle draws. A zero-length
    /// buffer is a no-op.
    pub fn render(
        &mut self,
        now: Instant,
        frame: &AmbientFrame,
        rng: &mut Rng8,
        leds: &mut [Rgb],
    ) {
        if leds.is_empty() {
            return;
        }

        let now_ms = now.as_millis();
        match self {
            Self::Solid => fills::solid(frame, leds),
            Self::Breathing => fills::breathing(frame, leds),
            Self::Rainbow => fills::rainbow(frame, leds),
            Self::Comet => trails::comet(frame, leds),
            Self::CylonScanner => trails::cylon_scanner(frame, leds),
            Self::Twinkle => sparkle::twinkle(frame, rng, leds),
            Self::Fire => sparkle::fire(frame, rng, leds),
            Self::GradientShift => fills::gradient_shift(frame, leds),
            Self::PlasmaBall => sparkle::plasma_ball(frame, rng, leds),
            Self::TheaterChase => fills::theater_chase(frame, leds),
            Self::ColorWipe => fills::color_wipe(frame, leds),
            Self::Pride(effect) => effect.render(frame, leds),
            Self::Pacifica(effect) => effect.render(now, leds),
            Self::BouncingBalls(effect) => effect.render(now, frame, leds),
            Self::Meteor => trails::meteor(frame, leds),
            Self::Confetti => sparkle::confetti(frame, rng, leds),
            Self::Juggle => trails::juggle(frame, leds),
            Self::Sinelon => trails::sinelon(frame, now_ms, leds),
            Self::Noise => fills::noise(frame, leds),
            Self::Matrix => trails::matrix(frame, rng, leds),
            Self::Ripple(effect) => effect.render(frame, rng, leds),
            Self::LarsonScanner => trails::larson_scanner(frame, now_ms, leds),
            Self::TwoColorWipe => fills::two_color_wipe(frame, leds),
            Self::Lightning => sparkle::lightning(frame, rng, leds),
        }
    }

    /// Reset cross-frame effect state
    pub fn reset(&mut self) {
        match self {
            Self::Pride(effect) => effect.reset(),
            Self::Pacifica(effect) => effect.reset(),
            Self::BouncingBalls(effect) => effect.reset(),
            Self::Ripple(effect) => effect.reset(),
            _ => {}
        }
    }

    /// Get the effect id for external observation
    pub const fn id(&self) -> AmbientEffectId {
        match self {
            Self::Solid => AmbientEffectId::Solid,
            Self::Breathing => AmbientEffectId::Breathing,
            Self::Rainbow => AmbientEffectId::Rainbow,
            Self::Comet => AmbientEffectId::Comet,
            Self::CylonScanner => AmbientEffectId::CylonScanner,
            Self::Twinkle => AmbientEffectId::Twinkle,
            Self::Fire => AmbientEffectId::Fire,
            Self::GradientShift => AmbientEffectId::GradientShift,
            Self::PlasmaBall => AmbientEffectId::PlasmaBall,
            Self::TheaterChase => AmbientEffectId::TheaterChase,
            Self::ColorWipe => AmbientEffectId::ColorWipe,
            Self::Pride(_) => AmbientEffectId::Pride,
            Self::Pacifica(_) => AmbientEffectId::Pacifica,
            Self::BouncingBalls(_) => AmbientEffectId::BouncingBalls,
            Self::Meteor => AmbientEffectId::Meteor,
            Self::Confetti => AmbientEffectId::Confetti,
            Self::Juggle => AmbientEffectId::Juggle,
            Self::Sinelon => AmbientEffectId::Sinelon,
            Self::Noise => AmbientEffectId::Noise,
            Self::Matrix => AmbientEffectId::Matrix,
            Self::Ripple(_) => AmbientEffectId::Ripple,
            Self::LarsonScanner => AmbientEffectId::LarsonScanner,
            Self::TwoColorWipe => AmbientEffectId::TwoColorWipe,
            Self::Lightning => AmbientEffectId::Lightning,
        }
    }
}
