mod gradient;
mod heat;
mod palette;
mod utils;

pub use gradient::{fill_gradient_rgb, fill_gradient_three_rgb};
pub use heat::heat_color;
pub use palette::Palette16;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    add_colors, blend_colors, fade_to_black_by, fill_rainbow, fill_solid, hsv2rgb, max_colors,
    rgb_from_u32, scale_color,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
