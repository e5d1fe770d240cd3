//! Rotating rainbow sweep
//!
//! The base hue follows a sawtooth beat and each following LED is offset
//! by a fixed hue step, so the rainbow appears to travel along the range.

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{Rgb, hsv},
    math8::beat8,
};

/// How hue is spread across the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSpread {
    /// Fixed hue offset between neighbouring LEDs
    Step(u8),
    /// One full hue circle across the whole canvas
    FullCircle,
}

#[derive(Debug, Clone)]
pub struct RainbowSweep {
    /// Base hue rotation speed
    bpm: u8,
    spread: HueSpread,
    saturation: u8,
    value: u8,
}

impl RainbowSweep {
    pub const fn new(bpm: u8) -> Self {
        Self {
            bpm,
            spread: HueSpread::FullCircle,
            saturation: 255,
            value: 255,
        }
    }

    #[must_use]
    pub const fn with_spread(mut self, spread: HueSpread) -> Self {
        self.spread = spread;
        self
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hue_at(&self, base: u8, index: usize, len: usize) -> u8 {
        let offset = match self.spread {
            HueSpread::Step(step) => index.wrapping_mul(usize::from(step)) as u8,
            HueSpread::FullCircle => ((index * 256) / len.max(1)) as u8,
        };
        base.wrapping_add(offset)
    }
}

impl Effect for RainbowSweep {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let base = beat8(now, self.bpm);
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            *led = hsv(self.hue_at(base, i, len), self.saturation, self.value);
        }
    }
}
