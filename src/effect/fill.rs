//! Segment by segment palette fill

use embassy_time::Instant;

use super::{Effect, fill_segment, segment_count};
use crate::color::{BLACK, Rgb};

/// Fills every segment with the first palette color, one segment per step,
/// then overfills with the next color, and so on. After the last color has
/// covered the range the canvas is cleared and the cycle restarts.
#[derive(Debug, Clone)]
pub struct AlternatingFill {
    palette: &'static [Rgb],
    segment_len: usize,
    segment: usize,
    color_index: usize,
    clear_pending: bool,
}

impl AlternatingFill {
    pub const fn new(palette: &'static [Rgb], segment_len: usize) -> Self {
        Self {
            palette,
            segment_len,
            segment: 0,
            color_index: 0,
            clear_pending: false,
        }
    }

    /// Palette index used by the next step
    pub const fn color_index(&self) -> usize {
        self.color_index
    }
}

impl Effect for AlternatingFill {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        let segments = segment_count(leds.len(), self.segment_len);
        let Some(&color) = self.palette.get(self.color_index) else {
            return;
        };
        if segments == 0 {
            return;
        }
        if self.clear_pending {
            leds.fill(BLACK);
            self.clear_pending = false;
        }

        fill_segment(leds, self.segment, self.segment_len, color);

        self.segment += 1;
        if self.segment >= segments {
            self.segment = 0;
            self.color_index += 1;
            if self.color_index >= self.palette.len() {
                self.color_index = 0;
                self.clear_pending = true;
            }
        }
    }
}
