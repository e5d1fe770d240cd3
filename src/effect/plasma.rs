//! Plasma: two travelling sine waves summed into hue and value

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{Rgb, hsv},
    math8::{beat8, qadd8, scale8, sin8},
};

/// Spatial frequency of the first wave (hue steps per LED)
const WAVE1_STEP: u8 = 11;
/// Spatial frequency of the second wave
const WAVE2_STEP: u8 = 17;
/// Floor so the plasma never goes fully dark
const MIN_VALUE: u8 = 32;

#[derive(Debug, Clone)]
pub struct Plasma {
    bpm1: u8,
    bpm2: u8,
    saturation: u8,
}

impl Plasma {
    pub const fn new(bpm1: u8, bpm2: u8) -> Self {
        Self {
            bpm1,
            bpm2,
            saturation: 240,
        }
    }
}

impl Effect for Plasma {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let shift1 = beat8(now, self.bpm1);
        let shift2 = beat8(now, self.bpm2);

        for (i, led) in leds.iter_mut().enumerate() {
            let x = i as u8;
            let wave1 = sin8(x.wrapping_mul(WAVE1_STEP).wrapping_add(shift1));
            let wave2 = sin8(x.wrapping_mul(WAVE2_STEP).wrapping_sub(shift2));

            let hue = wave1.wrapping_add(wave2);
            let value = qadd8(scale8(wave1, 127), scale8(wave2, 127)).max(MIN_VALUE);
            *led = hsv(hue, self.saturation, value);
        }
    }
}
