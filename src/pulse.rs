//! Table driven heartbeat brightness curve
//!
//! The beat phase is mapped onto a fixed 64-step cardiac waveform: a short
//! double thump followed by a long decay.

use embassy_time::Instant;

use crate::math8::{beat8, scale8};

/// Default tempo of the heartbeat, in beats per minute.
pub const DEFAULT_HEARTBEAT_BPM: u8 = 35;

/// Cardiac waveform, one beat sampled at 64 points.
pub const HEARTBEAT_TABLE: [u8; 64] = [
    25, 61, 105, 153, 197, 233, 253, 255, //
    252, 243, 230, 213, 194, 149, 101, 105, //
    153, 197, 216, 233, 244, 253, 255, 255, //
    252, 249, 243, 237, 230, 223, 213, 206, //
    194, 184, 174, 162, 149, 138, 126, 112, //
    101, 91, 78, 69, 62, 58, 51, 47, //
    43, 39, 37, 35, 29, 25, 22, 20, //
    19, 15, 12, 9, 8, 6, 5, 3,
];

/// Brightness (0-255) for a beat phase (0-255).
#[allow(clippy::cast_possible_truncation)]
pub fn heartbeat_at_phase(phase: u8) -> u8 {
    let last = HEARTBEAT_TABLE.len() - 1;
    // scale8 reaches the table length for the top phases, clamp onto the last step
    let index = usize::from(scale8(HEARTBEAT_TABLE.len() as u8, phase)).min(last);
    scale8(255, HEARTBEAT_TABLE[index])
}

/// Pulsing brightness (0-255) of a heart beating at `bpm`.
pub fn heartbeat8(now: Instant, bpm: u8) -> u8 {
    heartbeat_at_phase(beat8(now, bpm))
}
