//! Meteor with an exponentially decaying trail

use embassy_time::Instant;

use super::Effect;
use crate::color::{Rgb, fade_to_black_by};

#[derive(Debug, Clone)]
pub struct Meteor {
    color: Rgb,
    /// Number of fully lit pixels in the head
    size: usize,
    /// Fade applied to the whole canvas every step
    decay: u8,
    /// Extra steps past the end, so the trail can drain before wrapping
    overrun: usize,
    step: usize,
}

impl Meteor {
    pub const fn new(color: Rgb, size: usize, decay: u8, overrun: usize) -> Self {
        Self {
            color,
            size,
            decay,
            overrun,
            step: 0,
        }
    }

    /// Head position of the next step
    pub const fn step(&self) -> usize {
        self.step
    }
}

impl Effect for Meteor {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, self.decay);

        for offset in 0..self.size {
            let Some(index) = self.step.checked_sub(offset) else {
                break;
            };
            if let Some(led) = leds.get_mut(index) {
                *led = self.color;
            }
        }

        self.step += 1;
        if self.step >= leds.len() + self.overrun {
            self.step = 0;
        }
    }
}
