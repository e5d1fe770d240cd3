//! Warm engine-flame effects for the shuttle

use embassy_time::Instant;

use super::{Effect, position8};
use crate::{
    color::{ORANGE, RED, Rgb, WHITE, blend_colors, hsv, scale_color_video},
    math8::{Xorshift32, beat8, ease_in_out_quad, sin8},
};

/// Red to orange hue band of the flames
const FLAME_HUE_MAX: u8 = 24;

/// Every pixel independently picks a random warm color each step
#[derive(Debug, Clone)]
pub struct Flicker {
    min_heat: u8,
    rng: Xorshift32,
}

impl Flicker {
    pub const fn new(min_heat: u8, seed: u32) -> Self {
        Self {
            min_heat,
            rng: Xorshift32::new(seed),
        }
    }
}

impl Effect for Flicker {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        for led in leds {
            let hue = self.rng.between(0, FLAME_HUE_MAX);
            let heat = self.rng.between(self.min_heat, 255);
            *led = hsv(hue, 255, heat);
        }
    }
}

/// Red to orange gradient with a sine brightness wave running along it
#[derive(Debug, Clone)]
pub struct Wave {
    bpm: u8,
    /// Phase lag between neighbouring LEDs
    spacing: u8,
}

impl Wave {
    pub const fn new(bpm: u8, spacing: u8) -> Self {
        Self { bpm, spacing }
    }
}

impl Effect for Wave {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let shift = beat8(now, self.bpm);
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let base = blend_colors(RED, ORANGE, position8(i, len));
            let level = sin8(shift.wrapping_sub((i as u8).wrapping_mul(self.spacing)));
            *led = scale_color_video(base, level.max(48));
        }
    }
}

/// Beat synchronized thrust: white at the nozzle fading to the accent
/// color along the range, flaring up on each beat and easing back down
#[derive(Debug, Clone)]
pub struct Boost {
    accent: Rgb,
    bpm: u8,
}

impl Boost {
    pub const fn new(accent: Rgb, bpm: u8) -> Self {
        Self { accent, bpm }
    }
}

impl Effect for Boost {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let level = ease_in_out_quad(255 - beat8(now, self.bpm)).max(32);
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let color = blend_colors(WHITE, self.accent, position8(i, len));
            *led = scale_color_video(color, level);
        }
    }
}
