#![no_std]

pub mod ambient;
pub mod bounds;
pub mod color;
pub mod filter;
pub mod frame;
pub mod math8;
pub mod rng;
pub mod sequence;
pub mod turn_signal;
pub mod welcome;

pub use ambient::{AmbientEffectId, AmbientSlot};
pub use bounds::RenderingBounds;
pub use filter::{BrightnessFilter, Filter};
pub use frame::{AmbientFrame, TurnSignalFrame, WelcomeFrame};
pub use rng::Rng8;
pub use sequence::{
    CustomSequence, MAX_SEQUENCE_STEPS, SequenceError, SequenceStep, Side, TargetZone,
};
pub use turn_signal::TurnSignalEffectId;
pub use welcome::WelcomeEffectId;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
