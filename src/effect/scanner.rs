//! Single lit pixel bouncing between the ends of the canvas

use embassy_time::Instant;

use super::Effect;
use crate::color::{BLACK, Rgb};

#[derive(Debug, Clone)]
pub struct Scanner {
    color: Rgb,
    position: usize,
    forward: bool,
}

impl Scanner {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            position: 0,
            forward: true,
        }
    }

    /// Position that the next step will light
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Effect for Scanner {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        let Some(last) = leds.len().checked_sub(1) else {
            return;
        };
        // The canvas never shrinks at runtime, but stay inside it regardless.
        self.position = self.position.min(last);
        leds[self.position] = self.color;

        if self.position == 0 {
            self.forward = true;
        } else if self.position == last {
            self.forward = false;
        }
        if last == 0 {
            return;
        }
        if self.forward {
            self.position += 1;
        } else {
            self.position -= 1;
        }
    }
}
