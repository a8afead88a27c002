use crate::color::Rgb;

/// Bounds of a rendering area within a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    pub start: u16,
    pub end: u16,
}

impl RenderingBounds {
    /// Get the number of LEDs in the rendering area
    pub const fn count(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Get the bounded sub-slice of `leds`, clamped to the slice length
    pub fn slice(self, leds: &mut [Rgb]) -> &mut [Rgb] {
        let len = leds.len();
        let start = (self.start as usize).min(len);
        let end = (self.end as usize).clamp(start, len);
        &mut leds[start..end]
    }
}

/// Get the center of the array
pub const fn center_of<T>(arr: &[T]) -> usize {
    let count = arr.len();
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}
