//! Four stage showcase: dim everything, then ramp in three color layers
//!
//! 1. Dim: the canvas decays toward black.
//! 2. Base: the whole canvas ramps from black to the base color.
//! 3. Accent: the upper half ramps from the base to the accent color.
//! 4. Highlight: the upper quarter ramps from the accent to the highlight.
//!
//! Each stage lasts its own duration, then the sequence starts over.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::{BLACK, Rgb, blend_colors, fade_to_black_by},
    math8::progress8,
};

const DIM_FADE: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseStage {
    Dim,
    Base,
    Accent,
    Highlight,
}

impl ShowcaseStage {
    const fn next(self) -> Self {
        match self {
            Self::Dim => Self::Base,
            Self::Base => Self::Accent,
            Self::Accent => Self::Highlight,
            Self::Highlight => Self::Dim,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Showcase {
    base: Rgb,
    accent: Rgb,
    highlight: Rgb,
    /// Stage durations, in `ShowcaseStage` order
    durations: [Duration; 4],
    stage: ShowcaseStage,
    stage_start: Option<Instant>,
}

impl Showcase {
    pub const fn new(base: Rgb, accent: Rgb, highlight: Rgb) -> Self {
        Self {
            base,
            accent,
            highlight,
            durations: [
                Duration::from_millis(1_500),
                Duration::from_millis(2_500),
                Duration::from_millis(2_500),
                Duration::from_millis(2_500),
            ],
            stage: ShowcaseStage::Dim,
            stage_start: None,
        }
    }

    #[must_use]
    pub const fn with_durations(mut self, durations: [Duration; 4]) -> Self {
        self.durations = durations;
        self
    }

    pub const fn stage(&self) -> ShowcaseStage {
        self.stage
    }

    const fn duration_of(&self, stage: ShowcaseStage) -> Duration {
        match stage {
            ShowcaseStage::Dim => self.durations[0],
            ShowcaseStage::Base => self.durations[1],
            ShowcaseStage::Accent => self.durations[2],
            ShowcaseStage::Highlight => self.durations[3],
        }
    }

    /// Advance through every stage whose time is up, returning the elapsed
    /// time inside the current one.
    fn advance(&mut self, now: Instant) -> Duration {
        let mut start = *self.stage_start.get_or_insert(now);
        // Bounded so a zero-length configuration cannot spin forever.
        for _ in 0..4 {
            let duration = self.duration_of(self.stage);
            let elapsed = now.saturating_duration_since(start);
            if elapsed < duration {
                break;
            }
            start += duration;
            self.stage = self.stage.next();
        }
        if now.saturating_duration_since(start) >= self.duration_of(self.stage) {
            start = now;
        }
        self.stage_start = Some(start);
        now.saturating_duration_since(start)
    }
}

impl Effect for Showcase {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let elapsed = self.advance(now);
        let progress = progress8(elapsed, self.duration_of(self.stage));
        let len = leds.len();

        match self.stage {
            ShowcaseStage::Dim => fade_to_black_by(leds, DIM_FADE),
            ShowcaseStage::Base => leds.fill(blend_colors(BLACK, self.base, progress)),
            ShowcaseStage::Accent => {
                if let Some(upper) = leds.get_mut(len / 2..) {
                    upper.fill(blend_colors(self.base, self.accent, progress));
                }
            }
            ShowcaseStage::Highlight => {
                if let Some(top) = leds.get_mut(len - len / 4..) {
                    top.fill(blend_colors(self.accent, self.highlight, progress));
                }
            }
        }
    }
}
