//! Chasing lights over a segmented range

use embassy_time::Instant;

use super::{Effect, fill_segment, segment_count};
use crate::color::{BLACK, Rgb};

/// One segment lit at a time, sweeping forward then backward forever
#[derive(Debug, Clone)]
pub struct SegmentChase {
    segment_len: usize,
    color: Rgb,
    segment: usize,
    forward: bool,
}

impl SegmentChase {
    pub const fn new(segment_len: usize, color: Rgb) -> Self {
        Self {
            segment_len,
            color,
            segment: 0,
            forward: true,
        }
    }

    /// Segment lit by the next step
    pub const fn segment(&self) -> usize {
        self.segment
    }
}

impl Effect for SegmentChase {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        let Some(last) = segment_count(leds.len(), self.segment_len).checked_sub(1) else {
            return;
        };
        self.segment = self.segment.min(last);
        fill_segment(leds, self.segment, self.segment_len, self.color);

        if self.segment == 0 {
            self.forward = true;
        } else if self.segment == last {
            self.forward = false;
        }
        if last == 0 {
            return;
        }
        if self.forward {
            self.segment += 1;
        } else {
            self.segment -= 1;
        }
    }
}

/// Two pixels converging from opposite ends; they restart once they meet
#[derive(Debug, Clone)]
pub struct DualChase {
    left_color: Rgb,
    right_color: Rgb,
    left: usize,
    /// `None` until the canvas length is known
    right: Option<usize>,
}

impl DualChase {
    pub const fn new(left_color: Rgb, right_color: Rgb) -> Self {
        Self {
            left_color,
            right_color,
            left: 0,
            right: None,
        }
    }

    /// Indices lit by the next step, for a canvas of `len` LEDs
    pub fn indices(&self, len: usize) -> (usize, usize) {
        (self.left, self.right.unwrap_or(len.saturating_sub(1)))
    }
}

impl Effect for DualChase {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        let Some(last) = leds.len().checked_sub(1) else {
            return;
        };
        let right = self.right.unwrap_or(last).min(last);
        if let Some(led) = leds.get_mut(self.left) {
            *led = self.left_color;
        }
        leds[right] = self.right_color;

        self.left += 1;
        match right.checked_sub(1) {
            Some(next) if self.left <= next => self.right = Some(next),
            _ => {
                self.left = 0;
                self.right = Some(last);
            }
        }
    }
}
