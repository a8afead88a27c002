//! Custom welcome-sequence descriptor
//!
//! A user-authored playlist of welcome steps, each targeting a zone and a
//! side of the installation. The descriptor is validated as it is built;
//! playback itself is the driver's job.

use embassy_time::Duration;

use crate::{bounds::RenderingBounds, color::Rgb};

/// Maximum number of steps in one sequence
pub const MAX_SEQUENCE_STEPS: usize = 50;

/// Fixture zone a step renders to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TargetZone {
    Eyebrow = 0,
    Shroud = 1,
    DemonEye = 2,
}

impl TargetZone {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Eyebrow,
            1 => Self::Shroud,
            2 => Self::DemonEye,
            _ => return None,
        })
    }
}

/// Which half of a zone's strip a step renders to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    Both = 0,
    Left = 1,
    Right = 2,
}

impl Side {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Both,
            1 => Self::Left,
            2 => Self::Right,
            _ => return None,
        })
    }

    /// Bounds of this side within a strip of `led_count` pixels
    ///
    /// The left half gets the smaller share of an odd count.
    pub const fn bounds(self, led_count: u16) -> RenderingBounds {
        match self {
            Self::Both => RenderingBounds {
                start: 0,
                end: led_count,
            },
            Self::Left => RenderingBounds {
                start: 0,
                end: led_count / 2,
            },
            Self::Right => RenderingBounds {
                start: led_count / 2,
                end: led_count,
            },
        }
    }
}

/// One step of a custom sequence
#[derive(Clone, Copy, Debug)]
pub struct SequenceStep {
    pub zone: TargetZone,
    pub side: Side,
    pub effect_mode: u8,
    pub colors: [Rgb; 3],
    pub duration: Duration,
}

/// Reasons a step cannot join a sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// The sequence already holds [`MAX_SEQUENCE_STEPS`] steps
    Full,
    /// The step names an effect mode outside the registered range
    UnknownEffectMode,
    /// Adding the step would push the total past the configured ceiling
    TooLong,
}

/// Validated, bounded list of sequence steps
#[derive(Clone, Debug)]
pub struct CustomSequence {
    steps: heapless::Vec<SequenceStep, MAX_SEQUENCE_STEPS>,
    effect_mode_count: u8,
    max_total: Duration,
}

impl CustomSequence {
    /// Create an empty sequence accepting effect modes below
    /// `effect_mode_count` and a combined duration up to `max_total`
    pub const fn new(effect_mode_count: u8, max_total: Duration) -> Self {
        Self {
            steps: heapless::Vec::new(),
            effect_mode_count,
            max_total,
        }
    }

    /// Append a step, validating mode, capacity and total duration
    pub fn push(&mut self, step: SequenceStep) -> Result<(), SequenceError> {
        if step.effect_mode >= self.effect_mode_count {
            return Err(SequenceError::UnknownEffectMode);
        }
        if self.steps.is_full() {
            return Err(SequenceError::Full);
        }
        let total = self.total_duration() + step.duration;
        if total > self.max_total {
            return Err(SequenceError::TooLong);
        }
        // Capacity was checked above.
        let _ = self.steps.push(step);
        Ok(())
    }

    /// Combined duration of all steps
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .fold(Duration::from_millis(0), |acc, step| acc + step.duration)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The validated steps, in playback order
    pub fn steps(&self) -> &[SequenceStep] {
        &self.steps
    }

    /// Drop all steps, keeping the validation limits
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
