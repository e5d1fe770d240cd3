//! Street side planets
//!
//! The zone owns one single-pixel claim per planet, so its canvas holds the
//! planets in [`PLANET_COLORS`] order.

use embassy_time::Instant;

use super::{ModeTiming, ZoneProgram, mode_catalog};
use crate::{
    color::{Rgb, WHITE},
    effect::{BeatWave, Effect, LayeredSparkle},
    layout::PLANET_COLORS,
    math8::Xorshift32,
};

const MODE_DURATION_MS: u64 = 30_000;

/// Per-step decay of the planet sparkles
const SPARKLE_DECAY: u8 = 220;

mode_catalog! {
    pub enum StreetMode {
        Pulse = 0 => "pulse",
        Sparkle = 1 => "sparkle",
    }
}

impl StreetMode {
    pub const fn timing(self) -> ModeTiming {
        let frame_ms = match self {
            Self::Pulse => 30,
            Self::Sparkle => 150,
        };
        ModeTiming::from_millis(frame_ms, MODE_DURATION_MS)
    }
}

#[derive(Debug, Clone)]
enum StreetSlot {
    Pulse(BeatWave),
    Sparkle(LayeredSparkle),
}

#[derive(Debug, Clone)]
pub struct StreetZone {
    slot: StreetSlot,
    rng: Xorshift32,
}

impl StreetZone {
    pub fn new(seed: u32) -> Self {
        Self {
            slot: StreetSlot::Pulse(BeatWave::new(&PLANET_COLORS, 20)),
            rng: Xorshift32::new(seed),
        }
    }
}

impl ZoneProgram for StreetZone {
    type Mode = StreetMode;

    const NAME: &'static str = "street";

    fn initial_mode(&self) -> StreetMode {
        StreetMode::Pulse
    }

    fn next_mode(&self, mode: StreetMode) -> StreetMode {
        mode.next()
    }

    fn timing(&self, mode: StreetMode) -> ModeTiming {
        mode.timing()
    }

    fn enter(&mut self, mode: StreetMode, leds: &mut [Rgb]) {
        self.slot = match mode {
            StreetMode::Pulse => StreetSlot::Pulse(BeatWave::new(&PLANET_COLORS, 20)),
            StreetMode::Sparkle => StreetSlot::Sparkle(LayeredSparkle::new(
                &PLANET_COLORS,
                SPARKLE_DECAY,
                WHITE,
                self.rng.next_u32(),
            )),
        };
        match &mut self.slot {
            StreetSlot::Pulse(effect) => effect.enter(leds),
            StreetSlot::Sparkle(effect) => effect.enter(leds),
        }
    }

    fn step(&mut self, now: Instant, leds: &mut [Rgb]) {
        match &mut self.slot {
            StreetSlot::Pulse(effect) => effect.render(now, leds),
            StreetSlot::Sparkle(effect) => effect.render(now, leds),
        }
    }
}
