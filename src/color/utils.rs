pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, qadd8, scale8, scale8_video},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale a color toward black (255 = unchanged, 0 = black)
#[inline]
pub const fn scale_color(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, factor),
        g: scale8(color.g, factor),
        b: scale8(color.b, factor),
    }
}

/// Scale a color toward black without extinguishing lit channels
#[inline]
pub const fn scale_color_video(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale8_video(color.r, factor),
        g: scale8_video(color.g, factor),
        b: scale8_video(color.b, factor),
    }
}

/// Per-channel saturating sum of two colors
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Scale every LED in the slice toward black
pub fn scale_range(leds: &mut [Rgb], factor: u8) {
    if factor == 255 {
        return;
    }
    for led in leds {
        *led = scale_color(*led, factor);
    }
}

/// Dim every LED in the slice by `amount` (0 = unchanged, 255 = black)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    scale_range(leds, 255 - amount);
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack a color into 0x00RRGGBB
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
