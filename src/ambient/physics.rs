//! Bouncing-ball physics simulation

use embassy_time::Instant;

use crate::{
    color::{Rgb, fade_to_black_by},
    frame::AmbientFrame,
};

const BALL_COUNT: usize = 3;
/// Velocity lost per physics step, scaled by `speed / 10`
const GRAVITY: f32 = 0.08;
/// Energy retained on reflection at either end of the strip
const RESTITUTION: f32 = -0.85;
/// Minimum real time between physics steps
const STEP_INTERVAL_MS: u64 = 15;

/// Three independent point masses falling along the strip
///
/// Positions and velocities persist across frames; the simulation advances
/// at most once per [`STEP_INTERVAL_MS`] of real time regardless of how
/// often the effect is rendered.
#[derive(Debug, Clone, Default)]
pub struct BouncingBallsEffect {
    positions: [f32; BALL_COUNT],
    velocities: [f32; BALL_COUNT],
    last_step_ms: Option<u64>,
    primed: bool,
}

impl BouncingBallsEffect {
    pub const fn new() -> Self {
        Self {
            positions: [0.0; BALL_COUNT],
            velocities: [0.0; BALL_COUNT],
            last_step_ms: None,
            primed: false,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn render(&mut self, now: Instant, frame: &AmbientFrame, leds: &mut [Rgb]) {
        let len = leds.len();
        let top = (len - 1) as f32;

        if !self.primed {
            self.positions = [0.0, (len / 2) as f32, top];
            self.primed = true;
        }

        let ms = now.as_millis();
        if let Some(last) = self.last_step_ms {
            if ms.saturating_sub(last) < STEP_INTERVAL_MS {
                return;
            }
        }
        self.last_step_ms = Some(ms);

        fade_to_black_by(leds, 60);

        let colors = [frame.color1, frame.color2, frame.color3];
        let pull = GRAVITY * f32::from(frame.speed) / 10.0;
        for i in 0..BALL_COUNT {
            self.positions[i] += self.velocities[i];
            self.velocities[i] -= pull;

            if self.positions[i] <= 0.0 {
                self.positions[i] = 0.0;
                self.velocities[i] *= RESTITUTION;
            }
            if self.positions[i] >= top {
                self.positions[i] = top;
                self.velocities[i] *= RESTITUTION;
            }

            let pixel = self.positions[i] as usize;
            if pixel < len {
                leds[pixel] = colors[i];
            }
        }
    }
}
