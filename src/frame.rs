//! Per-frame parameter blocks
//!
//! The frame driver builds one of these fresh for every rendered frame and
//! discards it after the call. Constructors clamp the degenerate inputs
//! (zero speed, elapsed past the end) so the effect bodies never have to.

use embassy_time::Duration;

use crate::{color::Rgb, math8::map_range, math8::progress8};

/// Parameters for one frame of an ambient effect
///
/// `anim_step` is a free-running per-frame counter; effects use
/// `anim_step * speed` as their time proxy, wrapping at the integer width.
#[derive(Debug, Clone, Copy)]
pub struct AmbientFrame {
    pub anim_step: u16,
    /// Apparent velocity/frequency scalar, always >= 1
    pub speed: u8,
    pub color1: Rgb,
    pub color2: Rgb,
    pub color3: Rgb,
}

impl AmbientFrame {
    /// Build a frame, clamping `speed` to at least 1 (several effects divide
    /// or take a modulo by it)
    pub fn new(anim_step: u16, speed: u8, colors: [Rgb; 3]) -> Self {
        Self {
            anim_step,
            speed: speed.max(1),
            color1: colors[0],
            color2: colors[1],
            color3: colors[2],
        }
    }

    /// Combined animation phase, `anim_step * speed`
    pub const fn phase(&self) -> u32 {
        self.anim_step as u32 * self.speed as u32
    }
}

/// Parameters for one frame of a turn-signal effect
///
/// The color is final: callers apply brightness scaling before building the
/// frame. Time comes from the wall clock, so visual speed is independent of
/// frame rate.
#[derive(Debug, Clone, Copy)]
pub struct TurnSignalFrame {
    /// Logical speed, 0-100
    pub speed: u8,
    pub color: Rgb,
}

impl TurnSignalFrame {
    pub fn new(speed: u8, color: Rgb) -> Self {
        Self {
            speed: speed.min(100),
            color,
        }
    }

    /// Milliseconds per animation step: logical 0-100 maps inversely onto
    /// 25-5 ms (higher speed, shorter step)
    #[allow(clippy::cast_sign_loss)]
    pub const fn step_ms(&self) -> u64 {
        map_range(self.speed as i64, 0, 100, 25, 5) as u64
    }
}

/// Parameters for one frame of a welcome effect
///
/// Welcome effects are pure functions of `elapsed / duration`; a sequence
/// plays exactly once from 0 to `duration`.
#[derive(Debug, Clone, Copy)]
pub struct WelcomeFrame {
    pub elapsed: Duration,
    pub duration: Duration,
    pub color1: Rgb,
    pub color2: Rgb,
    pub color3: Rgb,
}

impl WelcomeFrame {
    /// Build a frame, clamping `duration` to at least 1 ms and `elapsed`
    /// into `[0, duration]`
    pub fn new(elapsed: Duration, duration: Duration, colors: [Rgb; 3]) -> Self {
        let duration = duration.max(Duration::from_millis(1));
        Self {
            elapsed: elapsed.min(duration),
            duration,
            color1: colors[0],
            color2: colors[1],
            color3: colors[2],
        }
    }

    /// Normalized progress, 0-255
    pub const fn progress8(&self) -> u8 {
        progress8(self.elapsed, self.duration)
    }

    /// Elapsed milliseconds since the sequence started
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis()
    }

    /// Total sequence length in milliseconds
    pub const fn duration_ms(&self) -> u64 {
        self.duration.as_millis()
    }
}
