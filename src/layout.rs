//! Fixture layout: which strip pixels belong to which part of the display
//!
//! The layout is supplied once at startup and validated before any loop
//! starts, so the lock-free partitioning of the buffers holds for the
//! whole process lifetime.

use core::fmt;

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::buffer::{Claim, StripId, fill_cells, first_overlap};
use crate::color::{ANTIQUE_WHITE, BLACK, DEEP_SKY_BLUE, ORANGE_RED, Rgb, WARM_WHITE};
use crate::stage::Stage;

/// Number of planets on the street side of the display
pub const PLANET_COUNT: usize = 5;

/// Upper bound of claims checked together at startup
pub const MAX_LAYOUT_CLAIMS: usize = 64;

/// Base colors of the planets, in [`Fixture::planets`] order
pub const PLANET_COLORS: [Rgb; PLANET_COUNT] = [
    ANTIQUE_WHITE, // moon
    DEEP_SKY_BLUE, // big blue planet, left
    DEEP_SKY_BLUE, // big blue planet, right
    ORANGE_RED,    // jupiter, upper
    ORANGE_RED,    // jupiter, lower
];

/// Errors detected while validating a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// More strips than the engine supports
    TooManyStrips,
    /// Strip longer than the commit path can copy
    StripTooLong { strip: StripId, len: usize },
    /// Claim refers to a strip that does not exist
    UnknownStrip(Claim),
    /// Claim is empty or extends past the end of its strip
    OutOfBounds(Claim),
    /// Two claims share pixels
    Overlap(Claim, Claim),
    /// A zone claims more pixels or ranges than its canvas can hold
    ZoneTooLarge,
    /// More claims than can be checked in one pass
    TooManyClaims,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyStrips => write!(f, "too many strips"),
            Self::StripTooLong { strip, len } => write!(f, "strip {strip} is too long ({len} LEDs)"),
            Self::UnknownStrip(claim) => write!(f, "claim on unknown strip {}", claim.strip),
            Self::OutOfBounds(claim) => write!(
                f,
                "claim {}..{} is outside strip {}",
                claim.span.start, claim.span.end, claim.strip
            ),
            Self::Overlap(a, b) => write!(
                f,
                "claims {}:{}..{} and {}:{}..{} overlap",
                a.strip, a.span.start, a.span.end, b.strip, b.span.start, b.span.end
            ),
            Self::ZoneTooLarge => write!(f, "zone claims exceed its canvas"),
            Self::TooManyClaims => write!(f, "too many claims"),
        }
    }
}

/// Check every claim against the strip lengths and against each other
pub fn validate_claims(claims: &[Claim], strip_lens: &[usize]) -> Result<(), LayoutError> {
    for claim in claims {
        let len = *strip_lens
            .get(claim.strip)
            .ok_or(LayoutError::UnknownStrip(*claim))?;
        if claim.span.is_empty() || usize::from(claim.span.end) > len {
            return Err(LayoutError::OutOfBounds(*claim));
        }
    }
    match first_overlap(claims) {
        Some((a, b)) => Err(LayoutError::Overlap(a, b)),
        None => Ok(()),
    }
}

/// Lookup table from named parts of the display to buffer indices
#[derive(Debug, Clone)]
pub struct Fixture {
    /// "The Machine" logo letters
    pub logo: Claim,
    /// Jackpot ladder, segmented
    pub jackpot: Claim,
    /// Pixels per jackpot segment
    pub jackpot_segment_len: usize,
    /// Heart pixel
    pub heart: Claim,
    /// Eye pixels next to the heart
    pub eyes: Claim,
    /// Shuttle engine flames
    pub shuttle: Claim,
    /// Planet pixels, one claim each
    pub planets: [Claim; PLANET_COUNT],
    /// Static decoration painted once at startup
    pub bride: (StripId, &'static [u16]),
}

/// Pixels of the bride figure on the second strip
const BRIDE_PIXELS: [u16; 33] = [
    3, 5, 6, 62, 63, 64, 65, 66, 67, 68, 69, 79, 88, 94, 95, 96, 97, 98, 103, 104, 105, 106,
    107, 108, 109, 110, 111, 112, 113, 115, 116, 117, 118,
];

impl Fixture {
    /// Strip lengths of the pinball display: jackpot + eyes + heart on the
    /// first strip, everything else on the second
    pub const PINBALL_STRIP_LENS: [usize; 2] = [8 * 6 + 4 + 1, 121];

    /// Layout of the pinball display
    pub const PINBALL: Self = Self {
        logo: Claim::new(1, 8, 20),
        jackpot: Claim::new(0, 0, 48),
        jackpot_segment_len: 6,
        heart: Claim::single(0, 52),
        eyes: Claim::new(0, 48, 52),
        shuttle: Claim::new(1, 55, 58),
        planets: [
            Claim::single(1, 25),
            Claim::single(1, 35),
            Claim::single(1, 36),
            Claim::single(1, 45),
            Claim::single(1, 46),
        ],
        bride: (1, &BRIDE_PIXELS),
    };

    /// Claims owned by the heart zone, heart pixel first
    pub const fn heart_claims(&self) -> [Claim; 2] {
        [self.heart, self.eyes]
    }

    /// Every zone claim plus the static decoration pixels
    pub fn all_claims(&self) -> Result<Vec<Claim, MAX_LAYOUT_CLAIMS>, LayoutError> {
        let mut claims = Vec::new();
        let zones = [self.logo, self.jackpot, self.heart, self.eyes, self.shuttle];
        let bride = self
            .bride
            .1
            .iter()
            .map(|&index| Claim::single(self.bride.0, index));
        for claim in zones.into_iter().chain(self.planets).chain(bride) {
            claims.push(claim).map_err(|_| LayoutError::TooManyClaims)?;
        }
        Ok(claims)
    }

    /// Startup check that every claim is in bounds and all are disjoint
    pub fn validate(&self, strip_lens: &[usize]) -> Result<(), LayoutError> {
        validate_claims(&self.all_claims()?, strip_lens)
    }

    /// Paint everything the scheduler never touches: blank all strips,
    /// light the static decoration in warm white, then commit once.
    pub fn paint_static<D: OutputDriver>(&self, stage: &Stage<'_, D>, now: Instant) {
        for cells in stage.strips() {
            fill_cells(cells, BLACK);
        }
        if let Some(cells) = stage.strip(self.bride.0) {
            for &index in self.bride.1 {
                if let Some(cell) = cells.get(usize::from(index)) {
                    cell.store(WARM_WHITE);
                }
            }
        }
        #[cfg(feature = "esp32-log")]
        println!("[Fixture] painted {} static pixels", self.bride.1.len());
        stage.commit(now);
    }
}
