//! Frame scheduling
//!
//! The game exposes a frame function returning [`LoopControl`]; a
//! [`TickSource`] decides when to call it. In the browser that is
//! `requestAnimationFrame`; in tests and the native demo it is
//! [`ManualTicks`], which calls it back-to-back.

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Something that repeatedly invokes a frame function until told to stop
pub trait TickSource {
    fn drive<F>(self, frame: F)
    where
        F: FnMut() -> LoopControl + 'static;
}

/// Synchronous driver: calls the frame function up to `max_frames` times
#[derive(Debug, Clone, Copy)]
pub struct ManualTicks {
    pub max_frames: u64,
}

impl ManualTicks {
    pub fn new(max_frames: u64) -> Self {
        Self { max_frames }
    }

    /// Drive a borrowed frame function; returns the number of frames run
    pub fn run<F>(self, mut frame: F) -> u64
    where
        F: FnMut() -> LoopControl,
    {
        let mut frames = 0;
        while frames < self.max_frames {
            frames += 1;
            if frame() == LoopControl::Stop {
                break;
            }
        }
        frames
    }
}

impl TickSource for ManualTicks {
    fn drive<F>(self, frame: F)
    where
        F: FnMut() -> LoopControl + 'static,
    {
        self.run(frame);
    }
}
