#![allow(dead_code)]

use pinball_light_zones::buffer::{FrameBuffer, StripId};
use pinball_light_zones::{Fixture, OutputDriver, Rgb, Stage};

/// Driver double that keeps the last frame written to every strip
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub writes: usize,
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last_frame(&self, strip: StripId) -> Option<&[Rgb]> {
        self.frames.get(strip).map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, strip: StripId, colors: &[Rgb]) {
        self.writes += 1;
        if self.frames.len() <= strip {
            self.frames.resize(strip + 1, Vec::new());
        }
        self.frames[strip] = colors.to_vec();
    }
}

pub const STRIP0_LEN: usize = Fixture::PINBALL_STRIP_LENS[0];
pub const STRIP1_LEN: usize = Fixture::PINBALL_STRIP_LENS[1];

/// Frame buffers sized like the pinball display
pub struct Buffers {
    pub strip0: FrameBuffer<STRIP0_LEN>,
    pub strip1: FrameBuffer<STRIP1_LEN>,
}

impl Buffers {
    pub const fn new() -> Self {
        Self {
            strip0: FrameBuffer::new(),
            strip1: FrameBuffer::new(),
        }
    }

    pub fn stage(&self) -> Stage<'_, RecordingDriver> {
        Stage::new(
            &[self.strip0.cells(), self.strip1.cells()],
            RecordingDriver::default(),
        )
        .expect("pinball strips fit the stage")
    }
}
