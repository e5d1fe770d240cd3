//! Heart and eyes
//!
//! Canvas index 0 is the heart pixel, the rest are the eyes, matching
//! [`Fixture::heart_claims`](crate::layout::Fixture::heart_claims).

use embassy_time::Instant;

use super::{ModeTiming, ZoneProgram, mode_catalog};
use crate::{
    color::{BLUE_VIOLET, RED, Rgb, WARM_WHITE},
    effect::{Effect, EyeStyle, Heartbeat},
    pulse::DEFAULT_HEARTBEAT_BPM,
};

const MODE_DURATION_MS: u64 = 60_000;

mode_catalog! {
    pub enum HeartMode {
        /// Heart beats, eyes hold warm white
        Beat = 0 => "beat",
        /// Heart and eyes beat together
        BeatWithEyes = 1 => "beat_with_eyes",
    }
}

impl HeartMode {
    #[allow(clippy::unused_self)]
    pub const fn timing(self) -> ModeTiming {
        ModeTiming::from_millis(20, MODE_DURATION_MS)
    }

    const fn eyes(self) -> EyeStyle {
        match self {
            Self::Beat => EyeStyle::Steady(WARM_WHITE),
            Self::BeatWithEyes => EyeStyle::Pulsing(BLUE_VIOLET),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeartZone {
    bpm: u8,
    heartbeat: Heartbeat,
}

impl Default for HeartZone {
    fn default() -> Self {
        Self::new(DEFAULT_HEARTBEAT_BPM)
    }
}

impl HeartZone {
    pub const fn new(bpm: u8) -> Self {
        Self {
            bpm,
            heartbeat: Heartbeat::new(RED, HeartMode::Beat.eyes(), bpm),
        }
    }

    pub const fn bpm(&self) -> u8 {
        self.bpm
    }
}

impl ZoneProgram for HeartZone {
    type Mode = HeartMode;

    const NAME: &'static str = "heart";

    fn initial_mode(&self) -> HeartMode {
        HeartMode::Beat
    }

    fn next_mode(&self, mode: HeartMode) -> HeartMode {
        mode.next()
    }

    fn timing(&self, mode: HeartMode) -> ModeTiming {
        mode.timing()
    }

    fn enter(&mut self, mode: HeartMode, leds: &mut [Rgb]) {
        self.heartbeat = Heartbeat::new(RED, mode.eyes(), self.bpm);
        self.heartbeat.enter(leds);
    }

    fn step(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.heartbeat.render(now, leds);
    }
}
