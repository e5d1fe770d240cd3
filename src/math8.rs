//! 8-bit fixed-point helpers shared by every effect.
//!
//! All functions are pure and allocation-free. Time based helpers take the
//! current [`Instant`] explicitly so they can be driven by simulated clocks.

use embassy_time::{Duration, Instant};

/// Milliseconds in one minute, used to turn beats-per-minute into a period.
const MS_PER_MINUTE: u64 = 60_000;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// `scale == 255` is the identity and `scale == 0` always yields zero.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, never dimming a lit channel all the way to zero.
///
/// Keeps dim pulses visible on the strip instead of flickering off.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Saturating 8-bit addition
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Calculate progress (0-255) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_millis() == 0 {
        return 0;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}

/// Sine of an 8-bit angle (256 = full turn), mapped to 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let radians = f32::from(theta) * (core::f32::consts::TAU / 256.0);
    // Float to int casts saturate, so 255.5 still lands on 255.
    (libm::sinf(radians) * 127.5 + 128.0) as u8
}

/// Linear sawtooth phase (0-255) repeating every `period`.
#[allow(clippy::cast_possible_truncation)]
pub fn phase8(now: Instant, period: Duration) -> u8 {
    let period_ms = period.as_millis().max(1);
    let offset = now.as_millis() % period_ms;
    ((offset * 256) / period_ms) as u8
}

/// Period of one beat at the given tempo.
#[allow(clippy::cast_lossless)]
pub const fn beat_period(bpm: u8) -> Duration {
    let bpm = if bpm == 0 { 1 } else { bpm as u64 };
    Duration::from_millis(MS_PER_MINUTE / bpm)
}

/// Sawtooth beat phase (0-255) at the given tempo.
pub fn beat8(now: Instant, bpm: u8) -> u8 {
    phase8(now, beat_period(bpm))
}

/// Sine oscillation between `low` and `high` at the given tempo.
pub fn beatsin8(now: Instant, bpm: u8, low: u8, high: u8) -> u8 {
    beatsin8_with_phase(now, bpm, low, high, 0)
}

/// Like [`beatsin8`], shifted by `phase` (256 = one full beat).
pub fn beatsin8_with_phase(now: Instant, bpm: u8, low: u8, high: u8, phase: u8) -> u8 {
    let (low, high) = if high < low { (high, low) } else { (low, high) };
    let wave = sin8(beat8(now, bpm).wrapping_add(phase));
    low + scale8(wave, high - low)
}

/// Ease in out quadratic
pub fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Small xorshift PRNG for visual randomness.
///
/// Deterministic for a given seed, which keeps sparkle effects testable.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator; a zero seed is replaced since it would stick at zero.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random byte
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    /// Random index in `0..len`; returns 0 for an empty range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }

    /// Random byte in `low..=high`
    #[allow(clippy::cast_possible_truncation)]
    pub fn between(&mut self, low: u8, high: u8) -> u8 {
        let (low, high) = if high < low { (high, low) } else { (low, high) };
        let span = u32::from(high - low) + 1;
        low + (self.next_u32() % span) as u8
    }
}
