mod palette;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use palette::*;
pub use utils::{
    add_colors, blend_colors, fade_to_black_by, hsv2rgb, rgb_from_u32, rgb_to_u32,
    scale_color, scale_color_video, scale_range,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Shorthand for an [`Hsv`] value converted to [`Rgb`]
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}
