use crate::color::{Rgb, blend_colors};

/// 16-entry color palette with linear-blend sampling
///
/// An 8-bit index selects one of 16 segments by its high nibble and blends
/// toward the next entry by the low nibble, wrapping at the end.
#[derive(Debug, Clone, Copy)]
pub struct Palette16(pub [Rgb; 16]);

impl Palette16 {
    /// Sample the palette at `index` (0-255) with blending between entries
    pub fn sample(&self, index: u8) -> Rgb {
        let entry = (index >> 4) as usize;
        let frac = index & 0x0F;

        let a = self.0[entry];
        let b = self.0[(entry + 1) % 16];
        blend_colors(a, b, frac << 4)
    }
}
