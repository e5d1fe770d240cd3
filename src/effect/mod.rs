//! Render steps shared by the zone mode catalogs
//!
//! Every effect renders into a zone-private canvas slice. Effects never know
//! where their pixels live on the physical strips; the zone machine copies
//! the canvas into its claims after each step.

mod chase;
mod fill;
mod flame;
mod meteor;
mod plasma;
mod pulse;
mod rainbow;
mod scanner;
mod showcase;
mod sparkle;
mod static_color;

use embassy_time::Instant;

pub use chase::{DualChase, SegmentChase};
pub use fill::AlternatingFill;
pub use flame::{Boost, Flicker, Wave};
pub use meteor::Meteor;
pub use plasma::Plasma;
pub use pulse::{BeatWave, EyeStyle, Heartbeat, HeartbeatPulse};
pub use rainbow::{HueSpread, RainbowSweep};
pub use scanner::Scanner;
pub use showcase::{Showcase, ShowcaseStage};
pub use sparkle::{LayeredSparkle, Sparkle};
pub use static_color::{SegmentedDefault, Solid};

use crate::color::{BLACK, Rgb};

pub trait Effect {
    /// Entry action, run once when the owning mode becomes current
    ///
    /// The default clears the canvas.
    fn enter(&mut self, leds: &mut [Rgb]) {
        leds.fill(BLACK);
    }

    /// Render a single step
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);
}

/// Number of segments of `segment_len` needed to cover `len` LEDs
pub(crate) const fn segment_count(len: usize, segment_len: usize) -> usize {
    if segment_len == 0 {
        return 0;
    }
    len.div_ceil(segment_len)
}

/// Fill one segment, clipped to the canvas
pub(crate) fn fill_segment(leds: &mut [Rgb], segment: usize, segment_len: usize, color: Rgb) {
    let start = segment.saturating_mul(segment_len).min(leds.len());
    let end = start.saturating_add(segment_len).min(leds.len());
    if let Some(pixels) = leds.get_mut(start..end) {
        pixels.fill(color);
    }
}

/// Position of `index` along a canvas of `len` LEDs, as 0-255
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn position8(index: usize, len: usize) -> u8 {
    if len <= 1 {
        return 0;
    }
    let last = len - 1;
    let index = if index < last { index } else { last };
    ((index * 255) / last) as u8
}
