use crate::{color::Rgb, math8::scale8_video};

/// Map a heat value (0-255) onto a black-red-yellow-white flame ramp
///
/// Classic blackbody approximation: the bottom third ramps red, the middle
/// third adds green, the top third adds blue toward white.
pub const fn heat_color(temperature: u8) -> Rgb {
    // Scale down to 0-191, keeping the three 64-step thirds aligned.
    let t192 = scale8_video(temperature, 191);

    // Ramp within the current third, stretched back to 0-252.
    let heat_ramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        // Hottest third: full red and green, ramp blue.
        Rgb {
            r: 255,
            g: 255,
            b: heat_ramp,
        }
    } else if t192 & 0x40 != 0 {
        // Middle third: full red, ramp green.
        Rgb {
            r: 255,
            g: heat_ramp,
            b: 0,
        }
    } else {
        // Coolest third: ramp red.
        Rgb {
            r: heat_ramp,
            g: 0,
            b: 0,
        }
    }
}
