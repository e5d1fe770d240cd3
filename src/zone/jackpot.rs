//! Jackpot ladder zone

use embassy_time::Instant;

use super::{ModeTiming, ZoneProgram, mode_catalog};
use crate::{
    color::{CYAN, DARK_ORANGE, DEEP_SKY_BLUE, GOLD, MAGENTA, RED, Rgb},
    effect::{
        AlternatingFill, DualChase, Effect, HeartbeatPulse, HueSpread, Meteor, Plasma,
        RainbowSweep, SegmentChase, SegmentedDefault, Sparkle,
    },
    math8::Xorshift32,
};

const MODE_DURATION_MS: u64 = 10_000;

/// Colors the alternating fill walks through
const FILL_PALETTE: [Rgb; 3] = [DARK_ORANGE, GOLD, RED];

mode_catalog! {
    /// Jackpot modes, in cycle order
    pub enum JackpotMode {
        /// One lit segment bouncing up and down the ladder
        Classic = 0 => "classic",
        AlternatingFill = 1 => "alternating_fill",
        DualChase = 2 => "dual_chase",
        Meteor = 3 => "meteor",
        Rainbow = 4 => "rainbow",
        Sparkle = 5 => "sparkle",
        Pulse = 6 => "pulse",
        Plasma = 7 => "plasma",
        /// Default segment colors, held
        DimmedHold = 8 => "dimmed_hold",
    }
}

impl JackpotMode {
    pub const fn timing(self) -> ModeTiming {
        let frame_ms = match self {
            Self::Classic => 300,
            Self::AlternatingFill => 120,
            Self::DualChase => 90,
            Self::Meteor => 40,
            Self::Rainbow | Self::Pulse => 20,
            Self::Sparkle | Self::Plasma => 30,
            Self::DimmedHold => 1_000,
        };
        ModeTiming::from_millis(frame_ms, MODE_DURATION_MS)
    }
}

#[derive(Debug, Clone)]
enum JackpotSlot {
    Classic(SegmentChase),
    AlternatingFill(AlternatingFill),
    DualChase(DualChase),
    Meteor(Meteor),
    Rainbow(RainbowSweep),
    Sparkle(Sparkle),
    Pulse(HeartbeatPulse),
    Plasma(Plasma),
    DimmedHold(SegmentedDefault),
}

impl Effect for JackpotSlot {
    fn enter(&mut self, leds: &mut [Rgb]) {
        match self {
            Self::Classic(effect) => effect.enter(leds),
            Self::AlternatingFill(effect) => effect.enter(leds),
            Self::DualChase(effect) => effect.enter(leds),
            Self::Meteor(effect) => effect.enter(leds),
            Self::Rainbow(effect) => effect.enter(leds),
            Self::Sparkle(effect) => effect.enter(leds),
            Self::Pulse(effect) => effect.enter(leds),
            Self::Plasma(effect) => effect.enter(leds),
            Self::DimmedHold(effect) => effect.enter(leds),
        }
    }

    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Classic(effect) => effect.render(now, leds),
            Self::AlternatingFill(effect) => effect.render(now, leds),
            Self::DualChase(effect) => effect.render(now, leds),
            Self::Meteor(effect) => effect.render(now, leds),
            Self::Rainbow(effect) => effect.render(now, leds),
            Self::Sparkle(effect) => effect.render(now, leds),
            Self::Pulse(effect) => effect.render(now, leds),
            Self::Plasma(effect) => effect.render(now, leds),
            Self::DimmedHold(effect) => effect.render(now, leds),
        }
    }
}

/// Jackpot zone: eight segments of six pixels on the pinball fixture
#[derive(Debug, Clone)]
pub struct JackpotZone {
    segment_len: usize,
    slot: JackpotSlot,
    rng: Xorshift32,
}

impl JackpotZone {
    pub fn new(segment_len: usize, seed: u32) -> Self {
        Self {
            segment_len,
            slot: JackpotSlot::DimmedHold(SegmentedDefault::new(segment_len, DARK_ORANGE, RED)),
            rng: Xorshift32::new(seed),
        }
    }

    pub const fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Chase head indices when dual chase is current, for a canvas of `len`
    pub fn dual_chase_indices(&self, len: usize) -> Option<(usize, usize)> {
        match &self.slot {
            JackpotSlot::DualChase(chase) => Some(chase.indices(len)),
            _ => None,
        }
    }

    /// Lit segment when the classic chase is current
    pub const fn classic_segment(&self) -> Option<usize> {
        match &self.slot {
            JackpotSlot::Classic(chase) => Some(chase.segment()),
            _ => None,
        }
    }

    fn slot_for(&mut self, mode: JackpotMode) -> JackpotSlot {
        let segment_len = self.segment_len;
        match mode {
            JackpotMode::Classic => JackpotSlot::Classic(SegmentChase::new(segment_len, RED)),
            JackpotMode::AlternatingFill => {
                JackpotSlot::AlternatingFill(AlternatingFill::new(&FILL_PALETTE, segment_len))
            }
            JackpotMode::DualChase => JackpotSlot::DualChase(DualChase::new(CYAN, MAGENTA)),
            JackpotMode::Meteor => JackpotSlot::Meteor(Meteor::new(DEEP_SKY_BLUE, 5, 70, 6)),
            JackpotMode::Rainbow => {
                JackpotSlot::Rainbow(RainbowSweep::new(20).with_spread(HueSpread::FullCircle))
            }
            JackpotMode::Sparkle => {
                JackpotSlot::Sparkle(Sparkle::new(GOLD, 40, self.rng.next_u32()))
            }
            JackpotMode::Pulse => JackpotSlot::Pulse(HeartbeatPulse::new(RED, 35)),
            JackpotMode::Plasma => JackpotSlot::Plasma(Plasma::new(13, 7)),
            JackpotMode::DimmedHold => {
                JackpotSlot::DimmedHold(SegmentedDefault::new(segment_len, DARK_ORANGE, RED))
            }
        }
    }
}

impl ZoneProgram for JackpotZone {
    type Mode = JackpotMode;

    const NAME: &'static str = "jackpot";

    fn initial_mode(&self) -> JackpotMode {
        JackpotMode::Classic
    }

    fn next_mode(&self, mode: JackpotMode) -> JackpotMode {
        mode.next()
    }

    fn timing(&self, mode: JackpotMode) -> ModeTiming {
        mode.timing()
    }

    fn enter(&mut self, mode: JackpotMode, leds: &mut [Rgb]) {
        self.slot = self.slot_for(mode);
        self.slot.enter(leds);
    }

    fn step(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.slot.render(now, leds);
    }
}
