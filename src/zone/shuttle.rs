//! Shuttle engine flames

use embassy_time::Instant;

use super::{ModeTiming, ZoneProgram, mode_catalog};
use crate::{
    color::{ORANGE_RED, Rgb},
    effect::{Boost, Effect, Flicker, Wave},
    math8::Xorshift32,
};

const MODE_DURATION_MS: u64 = 20_000;

mode_catalog! {
    pub enum ShuttleMode {
        Flicker = 0 => "flicker",
        Wave = 1 => "wave",
        Boost = 2 => "boost",
    }
}

impl ShuttleMode {
    pub const fn timing(self) -> ModeTiming {
        let frame_ms = match self {
            Self::Flicker => 70,
            Self::Wave => 30,
            Self::Boost => 20,
        };
        ModeTiming::from_millis(frame_ms, MODE_DURATION_MS)
    }
}

#[derive(Debug, Clone)]
enum ShuttleSlot {
    Flicker(Flicker),
    Wave(Wave),
    Boost(Boost),
}

impl Effect for ShuttleSlot {
    fn enter(&mut self, leds: &mut [Rgb]) {
        match self {
            Self::Flicker(effect) => effect.enter(leds),
            Self::Wave(effect) => effect.enter(leds),
            Self::Boost(effect) => effect.enter(leds),
        }
    }

    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Flicker(effect) => effect.render(now, leds),
            Self::Wave(effect) => effect.render(now, leds),
            Self::Boost(effect) => effect.render(now, leds),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShuttleZone {
    slot: ShuttleSlot,
    rng: Xorshift32,
}

impl ShuttleZone {
    pub fn new(seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        Self {
            slot: ShuttleSlot::Flicker(Flicker::new(96, rng.next_u32())),
            rng,
        }
    }
}

impl ZoneProgram for ShuttleZone {
    type Mode = ShuttleMode;

    const NAME: &'static str = "shuttle";

    fn initial_mode(&self) -> ShuttleMode {
        ShuttleMode::Flicker
    }

    fn next_mode(&self, mode: ShuttleMode) -> ShuttleMode {
        mode.next()
    }

    fn timing(&self, mode: ShuttleMode) -> ModeTiming {
        mode.timing()
    }

    fn enter(&mut self, mode: ShuttleMode, leds: &mut [Rgb]) {
        self.slot = match mode {
            ShuttleMode::Flicker => ShuttleSlot::Flicker(Flicker::new(96, self.rng.next_u32())),
            ShuttleMode::Wave => ShuttleSlot::Wave(Wave::new(40, 64)),
            ShuttleMode::Boost => ShuttleSlot::Boost(Boost::new(ORANGE_RED, 60)),
        };
        self.slot.enter(leds);
    }

    fn step(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.slot.render(now, leds);
    }
}
