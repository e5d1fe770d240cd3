//! Sparkle effects: decaying pixels with random highlights

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{Rgb, add_colors, fade_to_black_by, scale_color_video},
    math8::Xorshift32,
};

/// Everything decays, one random pixel flashes per step
#[derive(Debug, Clone)]
pub struct Sparkle {
    color: Rgb,
    fade: u8,
    rng: Xorshift32,
}

impl Sparkle {
    pub const fn new(color: Rgb, fade: u8, seed: u32) -> Self {
        Self {
            color,
            fade,
            rng: Xorshift32::new(seed),
        }
    }
}

impl Effect for Sparkle {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, self.fade);
        let index = self.rng.below(leds.len());
        if let Some(led) = leds.get_mut(index) {
            *led = self.color;
        }
    }
}

/// Persistent base colors with a transient additive sparkle on top
///
/// Each step every pixel decays by `decay`, its base color is added back,
/// then one random pixel gets `highlight` added. The base keeps the pixel
/// lit while the highlight fades out over the following steps.
#[derive(Debug, Clone)]
pub struct LayeredSparkle {
    base: &'static [Rgb],
    decay: u8,
    highlight: Rgb,
    rng: Xorshift32,
}

impl LayeredSparkle {
    pub const fn new(base: &'static [Rgb], decay: u8, highlight: Rgb, seed: u32) -> Self {
        Self {
            base,
            decay,
            highlight,
            rng: Xorshift32::new(seed),
        }
    }
}

impl Effect for LayeredSparkle {
    fn enter(&mut self, leds: &mut [Rgb]) {
        if self.base.is_empty() {
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            *led = self.base[i % self.base.len()];
        }
    }

    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if self.base.is_empty() {
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            let base = self.base[i % self.base.len()];
            *led = add_colors(scale_color_video(*led, self.decay), base);
        }
        let index = self.rng.below(leds.len());
        if let Some(led) = leds.get_mut(index) {
            *led = add_colors(*led, self.highlight);
        }
    }
}
