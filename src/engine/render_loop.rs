/// Lifecycle of the continuously rescheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Never started.
    #[default]
    Idle,
    /// Scheduled; every tick draws.
    Running,
    /// Cancelled; no further ticks draw.
    Cancelled,
}

/// Handle to the frame loop. Cancellation is explicit and idempotent.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    /// Schedule the loop. Restarting after a cancel is allowed.
    pub fn start(&mut self) {
        if self.state != LoopState::Running {
            log::debug!("frame loop started");
        }
        self.state = LoopState::Running;
    }

    /// Stop scheduling. Safe to call in any state.
    pub fn cancel(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("frame loop cancelled after {} frames", self.frames);
            self.state = LoopState::Cancelled;
        }
    }

    /// Whether ticks currently draw.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn count_frame(&mut self) {
        self.frames += 1;
    }
}
