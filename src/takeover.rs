//! Global heart override
//!
//! Every few minutes the whole display beats in two colors for a few
//! seconds. While the override runs it owns every buffer: zones observe
//! [`Signals::override_active`](crate::signals::Signals::override_active),
//! skip rendering and keep their own timers untouched.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::buffer::{PixelCell, fill_cells};
use crate::color::{BLACK, BLUE_VIOLET, RED, Rgb, scale_color_video};
use crate::output::MAX_STRIP_LEDS;
use crate::pulse::{DEFAULT_HEARTBEAT_BPM, heartbeat8};
use crate::stage::{MAX_STRIPS, Stage};
use crate::timing::Deadline;

/// Override schedule and look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeoverConfig {
    /// Time between two overrides, measured from the start of the previous one
    pub interval: Duration,
    /// How long one override owns the display
    pub duration: Duration,
    /// Time between two override frames
    pub frame_interval: Duration,
    pub bpm: u8,
    /// Color per strip, in channel order; strips past the end stay black
    pub colors: &'static [Rgb],
}

impl TakeoverConfig {
    pub const DEFAULT: Self = Self {
        interval: Duration::from_secs(600),
        duration: Duration::from_secs(15),
        frame_interval: Duration::from_millis(30),
        bpm: DEFAULT_HEARTBEAT_BPM,
        colors: &[RED, BLUE_VIOLET],
    };
}

impl Default for TakeoverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a call to [`Takeover::poll`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeoverPoll {
    /// Not running and not due yet
    Idle,
    /// Running; the caller should come back after `next_frame_in`
    Running { next_frame_in: Duration },
    /// The override window just ended and the buffers were handed back
    Finished,
}

struct Window {
    ends: Deadline,
    frame: Deadline,
}

/// Override controller, polled from the heart loop
pub struct Takeover {
    config: TakeoverConfig,
    /// Started on the first poll
    trigger: Option<Deadline>,
    window: Option<Window>,
    snapshot: Vec<Vec<Rgb, MAX_STRIP_LEDS>, MAX_STRIPS>,
}

impl Default for Takeover {
    fn default() -> Self {
        Self::new(TakeoverConfig::DEFAULT)
    }
}

impl Takeover {
    pub const fn new(config: TakeoverConfig) -> Self {
        Self {
            config,
            trigger: None,
            window: None,
            snapshot: Vec::new(),
        }
    }

    pub const fn config(&self) -> &TakeoverConfig {
        &self.config
    }

    pub const fn is_running(&self) -> bool {
        self.window.is_some()
    }

    /// Time until the next override starts; `None` while one is running or
    /// before the first poll
    pub fn next_in(&self, now: Instant) -> Option<Duration> {
        if self.is_running() {
            return None;
        }
        self.trigger.as_ref().map(|trigger| trigger.remaining(now))
    }

    /// Advance the override to `now`: start it when due, paint a frame
    /// when one is due, finish it when the window has elapsed.
    pub fn poll<D: OutputDriver>(&mut self, now: Instant, stage: &Stage<'_, D>) -> TakeoverPoll {
        if self.window.is_none() {
            let interval = self.config.interval;
            let trigger = self
                .trigger
                .get_or_insert_with(|| Deadline::new(now, interval));
            if !trigger.is_due(now) {
                return TakeoverPoll::Idle;
            }
            trigger.restart(now, interval);
            self.start(now, stage);
        }

        let Some(window) = self.window.as_mut() else {
            return TakeoverPoll::Idle;
        };
        if window.ends.is_due(now) {
            self.finish(now, stage);
            return TakeoverPoll::Finished;
        }
        if window.frame.is_due(now) {
            paint(&self.config, now, stage);
            window.frame.restart(now, self.config.frame_interval);
        }
        TakeoverPoll::Running {
            next_frame_in: window.frame.remaining(now),
        }
    }

    fn start<D: OutputDriver>(&mut self, now: Instant, stage: &Stage<'_, D>) {
        // Seize first so no zone publish lands between snapshot and paint
        stage.seize();
        self.snapshot.clear();
        for cells in stage.strips().iter().take(MAX_STRIPS) {
            let strip: Vec<Rgb, MAX_STRIP_LEDS> =
                cells.iter().take(MAX_STRIP_LEDS).map(PixelCell::load).collect();
            if self.snapshot.push(strip).is_err() {
                break;
            }
        }
        self.window = Some(Window {
            ends: Deadline::new(now, self.config.duration),
            frame: Deadline::immediate(now),
        });
        #[cfg(feature = "esp32-log")]
        println!("[Takeover] heart override started");
    }

    fn finish<D: OutputDriver>(&mut self, now: Instant, stage: &Stage<'_, D>) {
        for (cells, saved) in stage.strips().iter().zip(&self.snapshot) {
            for (cell, color) in cells.iter().zip(saved) {
                cell.store(*color);
            }
        }
        self.snapshot.clear();
        self.window = None;
        stage.commit(now);
        stage.release();
        #[cfg(feature = "esp32-log")]
        println!("[Takeover] heart override finished");
    }
}

/// Fill every strip with its color scaled by the heartbeat curve, then commit
fn paint<D: OutputDriver>(config: &TakeoverConfig, now: Instant, stage: &Stage<'_, D>) {
    let level = heartbeat8(now, config.bpm);
    for (strip, cells) in stage.strips().iter().enumerate() {
        let color = config.colors.get(strip).copied().unwrap_or(BLACK);
        fill_cells(cells, scale_color_video(color, level));
    }
    stage.commit(now);
}
