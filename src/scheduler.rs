//! Render loop shells
//!
//! Each zone gets its own perpetual loop. The loop polls its zone, then
//! yields for a short pacing interval; the yield only bounds how often the
//! clock is re-checked; frame timing itself lives in the zone.
//!
//! `tick` is synchronous and takes the current time, so hosts and tests
//! can drive the loops without an executor. `run` is the async shell for
//! embassy tasks.

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::layout::LayoutError;
use crate::signals::Signals;
use crate::stage::Stage;
use crate::takeover::{Takeover, TakeoverPoll};
use crate::zone::{HeartZone, RenderOutcome, ZoneMachine, ZoneProgram};

/// Loop yield tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Normal yield between polls
    pub short: Duration,
    /// Yield while a firmware update is in progress
    pub long: Duration,
}

impl Pacing {
    pub const DEFAULT: Self = Self {
        short: Duration::from_millis(5),
        long: Duration::from_millis(1000),
    };

    pub fn yield_for(&self, signals: &Signals) -> Duration {
        if signals.update_in_progress() {
            self.long
        } else {
            self.short
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub outcome: RenderOutcome,
    /// Whether the heart override owned the display during this tick
    pub takeover: bool,
    /// How long the caller should sleep before the next tick
    pub sleep: Duration,
}

/// Polling shell around one zone
pub struct ZoneLoop<'s, 'a, D: OutputDriver, P: ZoneProgram> {
    stage: &'s Stage<'a, D>,
    zone: ZoneMachine<P>,
    pacing: Pacing,
}

impl<'s, 'a, D: OutputDriver, P: ZoneProgram> ZoneLoop<'s, 'a, D, P> {
    /// Check the zone's claims against the stage and wrap it in a loop.
    ///
    /// Only this zone's claims are checked here. Overlap between zones is
    /// caught by [`Fixture::validate`](crate::layout::Fixture::validate),
    /// which must run once at startup before any loop is spawned.
    pub fn new(stage: &'s Stage<'a, D>, zone: ZoneMachine<P>) -> Result<Self, LayoutError> {
        crate::layout::validate_claims(zone.claims(), &stage.strip_lens())?;
        Ok(Self {
            stage,
            zone,
            pacing: Pacing::DEFAULT,
        })
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn zone(&self) -> &ZoneMachine<P> {
        &self.zone
    }

    pub fn stage(&self) -> &'s Stage<'a, D> {
        self.stage
    }

    /// One iteration: render if due, then report how long to yield
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let outcome = self.zone.render(now, self.stage);
        TickResult {
            outcome,
            takeover: outcome == RenderOutcome::Suspended,
            sleep: self.pacing.yield_for(self.stage.signals()),
        }
    }

    /// Run forever
    pub async fn run(mut self) -> ! {
        #[cfg(feature = "esp32-log")]
        println!("[{}] render loop started", P::NAME);
        loop {
            let result = self.tick(Instant::now());
            Timer::after(result.sleep).await;
        }
    }
}

/// Heart zone loop that also drives the global override
pub struct HeartLoop<'s, 'a, D: OutputDriver> {
    inner: ZoneLoop<'s, 'a, D, HeartZone>,
    takeover: Takeover,
}

impl<'s, 'a, D: OutputDriver> HeartLoop<'s, 'a, D> {
    pub fn new(
        stage: &'s Stage<'a, D>,
        zone: ZoneMachine<HeartZone>,
        takeover: Takeover,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            inner: ZoneLoop::new(stage, zone)?,
            takeover,
        })
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.inner = self.inner.with_pacing(pacing);
        self
    }

    pub fn zone(&self) -> &ZoneMachine<HeartZone> {
        self.inner.zone()
    }

    pub fn takeover(&self) -> &Takeover {
        &self.takeover
    }

    /// One iteration. While the override runs, this loop is occupied with
    /// it and sleeps only until the next override frame.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        match self.takeover.poll(now, self.inner.stage()) {
            TakeoverPoll::Running { next_frame_in } => TickResult {
                outcome: RenderOutcome::Suspended,
                takeover: true,
                sleep: next_frame_in,
            },
            TakeoverPoll::Idle | TakeoverPoll::Finished => self.inner.tick(now),
        }
    }

    pub async fn run(mut self) -> ! {
        #[cfg(feature = "esp32-log")]
        println!("[heart] render loop started");
        loop {
            let result = self.tick(Instant::now());
            Timer::after(result.sleep).await;
        }
    }
}
