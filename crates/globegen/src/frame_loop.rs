//! Self re-arming per-frame callback with an explicit cancellation handle.
//!
//! The host drives the loop by calling [`FrameLoop::step`] once per display
//! frame. Each step consumes the pending handle and arms a fresh one before
//! running, so cancelling between frames is enough to stop all further work.

use std::num::NonZeroU64;

/// Identifies one scheduled frame. Revoked by [`FrameLoop::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(NonZeroU64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    next_id: u64,
    frames: u64,
}

impl FrameLoop {
    /// Arms the loop. Starting an armed loop keeps its pending handle.
    pub fn start(&mut self) -> FrameHandle {
        if let Some(handle) = self.pending {
            return handle;
        }
        self.arm()
    }

    fn arm(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(NonZeroU64::MIN.saturating_add(self.next_id - 1));
        self.pending = Some(handle);
        handle
    }

    /// Runs one frame if the loop is armed, re-arming it first.
    ///
    /// Returns the number of the frame that ran, or `None` once cancelled.
    pub fn step(&mut self, run: impl FnOnce(u64)) -> Option<u64> {
        self.pending.take()?;
        self.arm();
        self.frames += 1;
        run(self.frames);
        Some(self.frames)
    }

    /// Revokes the pending frame. Returns the handle that was revoked.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames run since the loop was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
