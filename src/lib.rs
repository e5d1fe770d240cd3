#![no_std]

pub mod buffer;
pub mod color;
pub mod effect;
pub mod layout;
pub mod math8;
pub mod output;
pub mod pulse;
pub mod scheduler;
pub mod signals;
pub mod stage;
pub mod takeover;
pub mod timing;
pub mod zone;

pub use buffer::{Claim, FrameBuffer, PixelCell, Span, StripId};
pub use layout::{Fixture, LayoutError};
pub use output::Output;
pub use scheduler::{HeartLoop, Pacing, TickResult, ZoneLoop};
pub use signals::Signals;
pub use stage::Stage;
pub use takeover::{Takeover, TakeoverConfig, TakeoverPoll};
pub use timing::Deadline;
pub use zone::{
    HeartZone, JackpotZone, LogoZone, ModeTiming, RenderOutcome, ShuttleZone, StreetZone,
    ZoneMachine, ZoneProgram,
};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. Strips are
/// written one after another on every commit, in channel order.
pub trait OutputDriver {
    /// Write colors to one LED strip
    fn write(&mut self, strip: StripId, colors: &[Rgb]);
}
