//! Hardware commit path
//!
//! All loops share one [`Output`]. Commits are serialized through a
//! critical section because the strips hang off a single transmission
//! peripheral; the frame handed to the driver is a copy, so zones keep
//! rendering into the buffers while it is on the wire.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU8, Ordering};

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::OutputDriver;
use crate::buffer::PixelCell;
use crate::color::{Rgb, scale_color};

/// Longest strip the commit path can copy out
pub const MAX_STRIP_LEDS: usize = 256;

/// Window over which commits are counted for the FPS estimate
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Commits-per-second estimate over the last full window
#[derive(Debug, Clone, Default)]
struct FpsMeter {
    window_start: Option<Instant>,
    frames: u16,
    fps: u16,
}

impl FpsMeter {
    fn record(&mut self, now: Instant) -> u16 {
        let start = *self.window_start.get_or_insert(now);
        self.frames = self.frames.saturating_add(1);
        if now.saturating_duration_since(start) >= FPS_WINDOW {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Some(now);
        }
        self.fps
    }
}

struct OutputState<D> {
    driver: D,
    meter: FpsMeter,
}

/// Serialized access to the LED driver plus global brightness
pub struct Output<D: OutputDriver> {
    state: Mutex<RefCell<OutputState<D>>>,
    brightness: AtomicU8,
}

impl<D: OutputDriver> Output<D> {
    pub const fn new(driver: D) -> Self {
        Self {
            state: Mutex::new(RefCell::new(OutputState {
                driver,
                meter: FpsMeter {
                    window_start: None,
                    frames: 0,
                    fps: 0,
                },
            })),
            brightness: AtomicU8::new(255),
        }
    }

    /// Global brightness applied to every committed frame.
    ///
    /// Control surfaces may call this at any time; it never touches the
    /// frame buffers themselves.
    pub fn set_brightness(&self, brightness: u8) {
        self.brightness.store(brightness, Ordering::Relaxed);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    /// Push the current contents of all strips to the hardware.
    ///
    /// Returns the approximate achieved frame rate.
    pub fn commit(&self, strips: &[&[PixelCell]], now: Instant) -> u16 {
        let brightness = self.brightness();
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            for (id, cells) in strips.iter().enumerate() {
                let frame: Vec<Rgb, MAX_STRIP_LEDS> = cells
                    .iter()
                    .take(MAX_STRIP_LEDS)
                    .map(|cell| scale_color(cell.load(), brightness))
                    .collect();
                state.driver.write(id, &frame);
            }
            state.meter.record(now)
        })
    }

    /// Last frame rate estimate
    pub fn fps(&self) -> u16 {
        critical_section::with(|cs| self.state.borrow_ref(cs).meter.fps)
    }

    /// Run a closure with the driver, e.g. to inspect a test double
    pub fn with_driver<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs).driver))
    }
}
