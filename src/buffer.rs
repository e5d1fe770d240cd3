//! Shared frame buffers and ownership ranges
//!
//! A [`FrameBuffer`] is one physical strip. Every pixel lives in its own
//! atomic cell, so render loops, the commit path and the external control
//! surface can all touch the buffer concurrently without locks and without
//! undefined behavior. Visual correctness relies on zones writing only the
//! [`Claim`]s they own.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

/// Index of a strip inside the stage
pub type StripId = usize;

/// One lock-free pixel
#[derive(Debug, Default)]
pub struct PixelCell(AtomicU32);

impl PixelCell {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    #[inline]
    pub fn load(&self) -> Rgb {
        rgb_from_u32(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, color: Rgb) {
        self.0.store(rgb_to_u32(color), Ordering::Relaxed);
    }
}

/// Fixed-size pixel buffer for one strip
#[derive(Debug)]
pub struct FrameBuffer<const N: usize> {
    pixels: [PixelCell; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a black buffer; usable in `static` items.
    pub const fn new() -> Self {
        Self {
            pixels: [const { PixelCell::new() }; N],
        }
    }

    /// Type-erased view used by the rest of the engine
    pub const fn cells(&self) -> &[PixelCell] {
        &self.pixels
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read one pixel; `None` when out of range
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).map(PixelCell::load)
    }

    /// Write one pixel; returns `false` and does nothing when out of range.
    ///
    /// This is the entry point for external control surfaces. It bypasses
    /// zone ownership, so writes into a zone's range race with that zone and
    /// may be overdrawn on its next frame.
    pub fn set(&self, index: usize, color: Rgb) -> bool {
        match self.pixels.get(index) {
            Some(cell) => {
                cell.store(color);
                true
            }
            None => false,
        }
    }

    pub fn fill(&self, color: Rgb) {
        fill_cells(&self.pixels, color);
    }

    /// Copy the buffer out
    pub fn snapshot(&self) -> [Rgb; N] {
        core::array::from_fn(|i| self.pixels[i].load())
    }
}

/// Fill every cell of a strip with one color
pub fn fill_cells(cells: &[PixelCell], color: Rgb) {
    for cell in cells {
        cell.store(color);
    }
}

/// Half-open index range `[start, end)` within a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u16,
    pub end: u16,
}

impl Span {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one pixel
    pub const fn single(index: u16) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Get the number of LEDs in the span
    pub const fn count(self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index < self.end as usize
    }

    pub const fn overlaps(self, other: Span) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// The span as a `usize` range, clamped to `len`
    pub fn clamped(self, len: usize) -> core::ops::Range<usize> {
        let end = (self.end as usize).min(len);
        let start = (self.start as usize).min(end);
        start..end
    }
}

/// A span on a specific strip, owned by exactly one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub strip: StripId,
    pub span: Span,
}

impl Claim {
    pub const fn new(strip: StripId, start: u16, end: u16) -> Self {
        Self {
            strip,
            span: Span::new(start, end),
        }
    }

    pub const fn single(strip: StripId, index: u16) -> Self {
        Self {
            strip,
            span: Span::single(index),
        }
    }

    pub const fn overlaps(self, other: Claim) -> bool {
        self.strip == other.strip && self.span.overlaps(other.span)
    }
}

/// Check that no two claims intersect
pub fn claims_disjoint(claims: &[Claim]) -> bool {
    first_overlap(claims).is_none()
}

/// First pair of intersecting claims, if any
pub fn first_overlap(claims: &[Claim]) -> Option<(Claim, Claim)> {
    claims.iter().enumerate().find_map(|(i, a)| {
        claims[i + 1..]
            .iter()
            .find(|b| a.overlaps(**b))
            .map(|b| (*a, *b))
    })
}
