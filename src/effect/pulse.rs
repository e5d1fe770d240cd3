//! Heartbeat driven effects

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{BLACK, Rgb, scale_color_video},
    math8::beatsin8_with_phase,
    pulse::heartbeat8,
};

/// Solid color scaled by the heartbeat curve
#[derive(Debug, Clone)]
pub struct HeartbeatPulse {
    color: Rgb,
    bpm: u8,
}

impl HeartbeatPulse {
    pub const fn new(color: Rgb, bpm: u8) -> Self {
        Self { color, bpm }
    }
}

impl Effect for HeartbeatPulse {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let color = scale_color_video(self.color, heartbeat8(now, self.bpm));
        leds.fill(color);
    }
}

/// Sine brightness wave travelling over a set of pixels
///
/// Pixel `i` takes `palette[i % palette.len()]`, scaled between `low` and
/// `high` with a phase lag of `phase_step` per pixel.
#[derive(Debug, Clone)]
pub struct BeatWave {
    palette: &'static [Rgb],
    bpm: u8,
    low: u8,
    high: u8,
    phase_step: u8,
}

impl BeatWave {
    pub const fn new(palette: &'static [Rgb], bpm: u8) -> Self {
        Self {
            palette,
            bpm,
            low: 24,
            high: 255,
            phase_step: 48,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, low: u8, high: u8) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    #[must_use]
    pub const fn with_phase_step(mut self, phase_step: u8) -> Self {
        self.phase_step = phase_step;
        self
    }
}

impl Effect for BeatWave {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.palette.is_empty() {
            leds.fill(BLACK);
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            let phase = (i as u8).wrapping_mul(self.phase_step);
            let level = beatsin8_with_phase(now, self.bpm, self.low, self.high, phase);
            *led = scale_color_video(self.palette[i % self.palette.len()], level);
        }
    }
}

/// What the eye pixels do while the heart beats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeStyle {
    /// Eyes hold a fixed color
    Steady(Rgb),
    /// Eyes pulse along with the heart in the given color
    Pulsing(Rgb),
}

/// Heart pixel beating at the front of the canvas, eyes behind it
#[derive(Debug, Clone)]
pub struct Heartbeat {
    heart: Rgb,
    eyes: EyeStyle,
    bpm: u8,
}

impl Heartbeat {
    pub const fn new(heart: Rgb, eyes: EyeStyle, bpm: u8) -> Self {
        Self { heart, eyes, bpm }
    }
}

impl Effect for Heartbeat {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let level = heartbeat8(now, self.bpm);
        let Some((heart, eyes)) = leds.split_first_mut() else {
            return;
        };
        *heart = scale_color_video(self.heart, level);
        let eye_color = match self.eyes {
            EyeStyle::Steady(color) => color,
            EyeStyle::Pulsing(color) => scale_color_video(color, level),
        };
        eyes.fill(eye_color);
    }
}
