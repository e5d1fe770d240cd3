//! "The Machine" logo zone

use embassy_time::Instant;

use super::{ModeTiming, ZoneProgram, mode_catalog};
use crate::{
    color::{BLUE_VIOLET, DEEP_PINK, RED, Rgb, WARM_WHITE, WHITE},
    effect::{
        Effect, HeartbeatPulse, HueSpread, RainbowSweep, Scanner, Showcase, Solid, Sparkle,
    },
    math8::Xorshift32,
};

/// Every logo mode runs for a minute
const MODE_DURATION_MS: u64 = 60_000;

mode_catalog! {
    /// Logo modes, in cycle order
    pub enum LogoMode {
        Rainbow = 0 => "rainbow",
        Pulse = 1 => "pulse",
        Sparkle = 2 => "sparkle",
        Scanner = 3 => "scanner",
        Showcase = 4 => "showcase",
        Idle = 5 => "idle",
    }
}

impl LogoMode {
    pub const fn timing(self) -> ModeTiming {
        let frame_ms = match self {
            Self::Rainbow | Self::Pulse | Self::Showcase => 20,
            Self::Sparkle => 30,
            Self::Scanner => 40,
            Self::Idle => 1_000,
        };
        ModeTiming::from_millis(frame_ms, MODE_DURATION_MS)
    }

    fn to_slot(self, seed: u32) -> LogoSlot {
        match self {
            Self::Rainbow => LogoSlot::Rainbow(
                RainbowSweep::new(12)
                    .with_spread(HueSpread::Step(10))
                    .with_saturation(240),
            ),
            Self::Pulse => LogoSlot::Pulse(HeartbeatPulse::new(DEEP_PINK, 30)),
            Self::Sparkle => LogoSlot::Sparkle(Sparkle::new(WHITE, 40, seed)),
            Self::Scanner => LogoSlot::Scanner(Scanner::new(RED)),
            Self::Showcase => LogoSlot::Showcase(Showcase::new(DEEP_PINK, BLUE_VIOLET, WHITE)),
            Self::Idle => LogoSlot::Idle(Solid::new(WARM_WHITE)),
        }
    }
}

/// Scratch state of the current logo mode
#[derive(Debug, Clone)]
enum LogoSlot {
    Rainbow(RainbowSweep),
    Pulse(HeartbeatPulse),
    Sparkle(Sparkle),
    Scanner(Scanner),
    Showcase(Showcase),
    Idle(Solid),
}

impl Effect for LogoSlot {
    fn enter(&mut self, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(effect) => effect.enter(leds),
            Self::Pulse(effect) => effect.enter(leds),
            Self::Sparkle(effect) => effect.enter(leds),
            Self::Scanner(effect) => effect.enter(leds),
            Self::Showcase(effect) => effect.enter(leds),
            Self::Idle(effect) => effect.enter(leds),
        }
    }

    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(effect) => effect.render(now, leds),
            Self::Pulse(effect) => effect.render(now, leds),
            Self::Sparkle(effect) => effect.render(now, leds),
            Self::Scanner(effect) => effect.render(now, leds),
            Self::Showcase(effect) => effect.render(now, leds),
            Self::Idle(effect) => effect.render(now, leds),
        }
    }
}

/// Logo zone: rotates through its modes every minute
#[derive(Debug, Clone)]
pub struct LogoZone {
    slot: LogoSlot,
    rng: Xorshift32,
}

impl LogoZone {
    pub fn new(seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        Self {
            slot: LogoMode::Rainbow.to_slot(rng.next_u32()),
            rng,
        }
    }

    /// Bounce position of the scanner, when it is the current mode
    pub const fn scanner_position(&self) -> Option<usize> {
        match &self.slot {
            LogoSlot::Scanner(scanner) => Some(scanner.position()),
            _ => None,
        }
    }
}

impl ZoneProgram for LogoZone {
    type Mode = LogoMode;

    const NAME: &'static str = "logo";

    fn initial_mode(&self) -> LogoMode {
        LogoMode::Rainbow
    }

    fn next_mode(&self, mode: LogoMode) -> LogoMode {
        mode.next()
    }

    fn timing(&self, mode: LogoMode) -> ModeTiming {
        mode.timing()
    }

    fn enter(&mut self, mode: LogoMode, leds: &mut [Rgb]) {
        self.slot = mode.to_slot(self.rng.next_u32());
        self.slot.enter(leds);
    }

    fn step(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.slot.render(now, leds);
    }
}
