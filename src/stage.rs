//! Shared context every render loop works against

use heapless::Vec;

use embassy_time::Instant;

use crate::OutputDriver;
use crate::buffer::{Claim, PixelCell, StripId};
use crate::color::{Rgb, scale_color};
use crate::layout::LayoutError;
use crate::output::{MAX_STRIP_LEDS, Output};
use crate::signals::Signals;

/// Maximum number of physical strips
pub const MAX_STRIPS: usize = 4;

/// Frame buffers, flags and the commit path, shared by reference between
/// all loops.
///
/// The stage does not know which zone owns which pixels. Run
/// [`Fixture::validate`](crate::layout::Fixture::validate) against
/// [`Stage::strip_lens`] at startup so that no two zones share a pixel.
pub struct Stage<'a, D: OutputDriver> {
    strips: Vec<&'a [PixelCell], MAX_STRIPS>,
    signals: Signals,
    output: Output<D>,
}

impl<'a, D: OutputDriver> Stage<'a, D> {
    /// Create the stage over the given strips, in channel order
    pub fn new(strips: &[&'a [PixelCell]], driver: D) -> Result<Self, LayoutError> {
        let mut list = Vec::new();
        for (strip, cells) in strips.iter().enumerate() {
            if cells.len() > MAX_STRIP_LEDS {
                return Err(LayoutError::StripTooLong {
                    strip,
                    len: cells.len(),
                });
            }
            list.push(*cells).map_err(|_| LayoutError::TooManyStrips)?;
        }
        Ok(Self {
            strips: list,
            signals: Signals::new(),
            output: Output::new(driver),
        })
    }

    pub fn strips(&self) -> &[&'a [PixelCell]] {
        &self.strips
    }

    pub fn strip(&self, id: StripId) -> Option<&'a [PixelCell]> {
        self.strips.get(id).copied()
    }

    /// Length of every strip, in channel order
    pub fn strip_lens(&self) -> Vec<usize, MAX_STRIPS> {
        self.strips.iter().map(|cells| cells.len()).collect()
    }

    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    pub fn output(&self) -> &Output<D> {
        &self.output
    }

    /// Push all strips to the hardware, returning the approximate FPS
    pub fn commit(&self, now: Instant) -> u16 {
        self.output.commit(&self.strips, now)
    }

    /// Copy a zone canvas into its claims, in claim order.
    ///
    /// Runs inside the same critical section the override uses to take the
    /// buffers over, so once the override is active no zone write can land.
    /// Returns `false` when the override is active and nothing was written.
    pub(crate) fn publish(&self, claims: &[Claim], canvas: &[Rgb], dim: Option<u8>) -> bool {
        critical_section::with(|_| {
            if self.signals.override_active() {
                return false;
            }
            let mut offset = 0;
            for claim in claims {
                let count = claim.span.count();
                let chunk = canvas.get(offset..offset + count).unwrap_or(&[]);
                offset += count;
                let Some(cells) = self.strip(claim.strip) else {
                    continue;
                };
                let start = usize::from(claim.span.start);
                for (i, color) in chunk.iter().enumerate() {
                    if let Some(cell) = cells.get(start + i) {
                        cell.store(dim.map_or(*color, |factor| scale_color(*color, factor)));
                    }
                }
            }
            true
        })
    }

    /// Raise the override flag, excluding any in-flight zone publish
    pub(crate) fn seize(&self) {
        critical_section::with(|_| self.signals.set_override(true));
    }

    pub(crate) fn release(&self) {
        self.signals.set_override(false);
    }
}
