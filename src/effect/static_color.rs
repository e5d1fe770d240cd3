//! Static fills

use embassy_time::Instant;

use super::{Effect, segment_count};
use crate::color::Rgb;

/// Fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct Solid {
    color: Rgb,
}

impl Solid {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for Solid {
    fn enter(&mut self, leds: &mut [Rgb]) {
        leds.fill(self.color);
    }

    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        leds.fill(self.color);
    }
}

/// Two-tone resting pattern: the first half of the segments in one color,
/// the rest in another. Painted on entry and held.
#[derive(Debug, Clone)]
pub struct SegmentedDefault {
    segment_len: usize,
    first: Rgb,
    second: Rgb,
}

impl SegmentedDefault {
    pub const fn new(segment_len: usize, first: Rgb, second: Rgb) -> Self {
        Self {
            segment_len,
            first,
            second,
        }
    }

    fn paint(&self, leds: &mut [Rgb]) {
        let segments = segment_count(leds.len(), self.segment_len);
        let split = segments / 2;
        for (i, led) in leds.iter_mut().enumerate() {
            let segment = i / self.segment_len.max(1);
            *led = if segment < split { self.first } else { self.second };
        }
    }
}

impl Effect for SegmentedDefault {
    fn enter(&mut self, leds: &mut [Rgb]) {
        self.paint(leds);
    }

    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        self.paint(leds);
    }
}
