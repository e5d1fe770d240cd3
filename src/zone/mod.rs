//! Zone state machines
//!
//! A zone owns a fixed set of claims, a private canvas covering them, and a
//! catalog of modes that it cycles through. [`ZoneMachine`] implements the
//! shared contract; each concrete zone only supplies its catalog through
//! [`ZoneProgram`].

mod heart;
mod jackpot;
mod logo;
mod shuttle;
mod street;

use core::fmt::Debug;

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use heart::{HeartMode, HeartZone};
pub use jackpot::{JackpotMode, JackpotZone};
pub use logo::{LogoMode, LogoZone};
pub use shuttle::{ShuttleMode, ShuttleZone};
pub use street::{StreetMode, StreetZone};

use crate::OutputDriver;
use crate::buffer::Claim;
use crate::color::{BLACK, Rgb};
use crate::layout::LayoutError;
use crate::stage::Stage;
use crate::timing::Deadline;

/// Largest canvas a single zone can own
pub const MAX_ZONE_LEDS: usize = 64;

/// Most claims a single zone can own
pub const MAX_ZONE_CLAIMS: usize = 8;

/// Declares a mode id enum with raw/string conversions and a cyclic order.
///
/// Variants cycle in declaration order.
macro_rules! mode_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $raw:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $raw,)+
        }

        impl $name {
            /// Every mode, in cyclic order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Unknown values map to `None`, never to a mode
            pub const fn from_raw(value: u8) -> Option<Self> {
                match value {
                    $($raw => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            pub fn parse_from_str(s: &str) -> Option<Self> {
                match s {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Mode that follows this one
            pub fn next(self) -> Self {
                let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
                Self::ALL
                    .get((index + 1) % Self::ALL.len())
                    .copied()
                    .unwrap_or(self)
            }
        }
    };
}

pub(crate) use mode_catalog;

/// Per-mode pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTiming {
    /// Minimum time between two steps
    pub frame_interval: Duration,
    /// Time after which the zone moves on to the next mode
    pub duration: Duration,
}

impl ModeTiming {
    pub const fn from_millis(frame_interval_ms: u64, duration_ms: u64) -> Self {
        Self {
            frame_interval: Duration::from_millis(frame_interval_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// The mode catalog of one zone
pub trait ZoneProgram {
    type Mode: Copy + Eq + Debug;

    /// Name used in log output
    const NAME: &'static str;

    fn initial_mode(&self) -> Self::Mode;

    /// Mode that follows `mode` in this zone's fixed cycle
    fn next_mode(&self, mode: Self::Mode) -> Self::Mode;

    fn timing(&self, mode: Self::Mode) -> ModeTiming;

    /// Make `mode` current with fresh scratch state and run its entry action
    fn enter(&mut self, mode: Self::Mode, leds: &mut [Rgb]);

    /// Render one step of the current mode
    fn step(&mut self, now: Instant, leds: &mut [Rgb]);
}

/// What a call to [`ZoneMachine::render`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The global override owns the buffers; nothing happened
    Suspended,
    /// The next frame is not due yet
    Waiting,
    /// One step was rendered and committed
    Rendered { fps: u16 },
}

#[derive(Debug, Clone, Copy)]
struct ModeState<M> {
    mode: M,
    /// Started at the mode switch, due when the mode has run its course
    lifetime: Deadline,
    /// Started at the last step, due when the next step may render
    frame: Deadline,
    frame_interval: Duration,
}

/// Runtime state of one zone
pub struct ZoneMachine<P: ZoneProgram> {
    program: P,
    claims: Vec<Claim, MAX_ZONE_CLAIMS>,
    canvas: Vec<Rgb, MAX_ZONE_LEDS>,
    /// Scale applied when copying the canvas out, for zones sharing an
    /// enclosure with brighter ones
    dim: Option<u8>,
    state: Option<ModeState<P::Mode>>,
}

impl<P: ZoneProgram> ZoneMachine<P> {
    /// Create a zone over `claims`; the canvas concatenates them in order.
    pub fn new(program: P, claims: &[Claim]) -> Result<Self, LayoutError> {
        let claims: Vec<Claim, MAX_ZONE_CLAIMS> =
            Vec::from_slice(claims).map_err(|()| LayoutError::ZoneTooLarge)?;
        let len: usize = claims.iter().map(|claim| claim.span.count()).sum();
        let mut canvas = Vec::new();
        canvas
            .resize(len, BLACK)
            .map_err(|()| LayoutError::ZoneTooLarge)?;
        Ok(Self {
            program,
            claims,
            canvas,
            dim: None,
            state: None,
        })
    }

    /// Scale everything this zone publishes by `factor`
    #[must_use]
    pub fn with_dim(mut self, factor: u8) -> Self {
        self.dim = Some(factor);
        self
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// The zone's private copy of what it last rendered
    pub fn canvas(&self) -> &[Rgb] {
        &self.canvas
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    /// Current mode, `None` before the first render
    pub fn mode(&self) -> Option<P::Mode> {
        self.state.as_ref().map(|state| state.mode)
    }

    /// When the current mode became current
    pub fn mode_started(&self) -> Option<Instant> {
        self.state.as_ref().map(|state| state.lifetime.since())
    }

    /// Time until the next step may render
    pub fn next_frame_in(&self, now: Instant) -> Option<Duration> {
        self.state.as_ref().map(|state| state.frame.remaining(now))
    }

    /// Advance the zone to `now`: switch modes if the current one has run
    /// its course, then render, publish and commit one step if it is due.
    pub fn render<D: OutputDriver>(&mut self, now: Instant, stage: &Stage<'_, D>) -> RenderOutcome {
        if stage.signals().override_active() {
            return RenderOutcome::Suspended;
        }

        let current = self
            .state
            .as_ref()
            .map(|state| (state.mode, state.lifetime.is_due(now)));
        match current {
            None => {
                let mode = self.program.initial_mode();
                self.switch_to(mode, now);
            }
            Some((mode, true)) => {
                let next = self.program.next_mode(mode);
                self.switch_to(next, now);
            }
            Some((_, false)) => {}
        }

        let Some(state) = self.state.as_mut() else {
            return RenderOutcome::Waiting;
        };
        if !state.frame.is_due(now) {
            return RenderOutcome::Waiting;
        }

        self.program.step(now, &mut self.canvas);
        state.frame.restart(now, state.frame_interval);

        if !stage.publish(&self.claims, &self.canvas, self.dim) {
            return RenderOutcome::Suspended;
        }
        RenderOutcome::Rendered {
            fps: stage.commit(now),
        }
    }

    fn switch_to(&mut self, mode: P::Mode, now: Instant) {
        let timing = self.program.timing(mode);
        self.program.enter(mode, &mut self.canvas);
        self.state = Some(ModeState {
            mode,
            lifetime: Deadline::new(now, timing.duration),
            frame: Deadline::immediate(now),
            frame_interval: timing.frame_interval,
        });
        #[cfg(feature = "esp32-log")]
        println!("[{}] switching to mode {:?}", P::NAME, mode);
    }
}
