//! Process-wide flags shared by all render loops

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Flags observed by every loop
#[derive(Debug, Default)]
pub struct Signals {
    /// Set while the global heart override owns the buffers
    takeover: AtomicBool,
    /// Set once a firmware update transfer has started
    update: AtomicBool,
}

impl Signals {
    pub const fn new() -> Self {
        Self {
            takeover: AtomicBool::new(false),
            update: AtomicBool::new(false),
        }
    }

    /// Whether the global override currently owns all buffers
    #[inline]
    pub fn override_active(&self) -> bool {
        self.takeover.load(Ordering::Acquire)
    }

    /// Only the override controller flips this flag.
    pub(crate) fn set_override(&self, active: bool) {
        self.takeover.store(active, Ordering::Release);
    }

    /// Called by the update collaborator when a flash transfer starts.
    ///
    /// The flag is never cleared: the device reboots after the update.
    pub fn begin_update(&self) {
        if !self.update.swap(true, Ordering::AcqRel) {
            #[cfg(feature = "esp32-log")]
            println!("[Signals] firmware update started, slowing render loops");
        }
    }

    #[inline]
    pub fn update_in_progress(&self) -> bool {
        self.update.load(Ordering::Acquire)
    }
}
