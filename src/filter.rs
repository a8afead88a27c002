//! Post-render frame filters
//!
//! Effects render final colors; global brightness is applied afterwards by
//! the driver through [`BrightnessFilter`]. This keeps every pattern
//! independent of the configured brightness.

use embassy_time::{Duration, Instant};

use crate::{
    color::{BLACK, Rgb},
    math8::{blend8, progress8, scale8},
};

/// A post-processing stage applied to a finished frame
pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);

    /// Advance time-dependent filter state
    fn tick(&mut self, _now: Instant) {}
}

/// Global brightness with a millisecond-smooth fade between targets
#[derive(Debug, Clone)]
pub struct BrightnessFilter {
    current: u8,
    source: u8,
    target: Option<u8>,
    duration: Duration,
    start_time: Instant,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self {
            current: brightness,
            source: brightness,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Set a new brightness target, fading over `duration`
    ///
    /// A zero duration applies immediately.
    pub fn set(&mut self, brightness: u8, duration: Duration, now: Instant) {
        self.start_time = now;
        if duration.as_millis() == 0 {
            self.current = brightness;
            self.source = brightness;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            self.source = self.current;
            self.target = Some(brightness);
            self.duration = duration;
        }
    }

    /// Current (possibly mid-fade) brightness value
    pub const fn value(&self) -> u8 {
        self.current
    }

    /// Check if a fade is in progress
    pub const fn is_fading(&self) -> bool {
        self.target.is_some()
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let current = self.current;

        if current == 255 {
            return;
        }

        if current == 0 {
            for pixel in frame.iter_mut() {
                *pixel = BLACK;
            }
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, current);
            pixel.g = scale8(pixel.g, current);
            pixel.b = scale8(pixel.b, current);
        }
    }

    fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = now.duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let progress = progress8(elapsed, self.duration);
        self.current = blend8(self.source, target, progress);
    }
}
