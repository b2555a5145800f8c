// animation.rs - Frame-rate independent pacing on top of a host scheduler

use std::time::Duration;

use tracing::trace;

use crate::config::clamp_interval;

/// Identifies one outstanding frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's display-refresh primitive plus its monotonic clock.
pub trait Scheduler {
    /// Asks the host for one more frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraws a request. The host may still deliver it; the loop ignores
    /// it either way.
    fn cancel(&mut self, handle: FrameHandle);

    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel(&mut self, handle: FrameHandle) {
        (**self).cancel(handle)
    }

    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running {
        reference: Duration,
        pending: FrameHandle,
    },
}

/// What `on_frame` did with a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Not running, or not the frame we asked for. Nothing happened.
    Ignored,
    /// Too early; another frame was requested.
    Waiting,
    /// The step ran and another frame was requested.
    Stepped,
}

/// Invokes a step callback at most once per tick interval, however often
/// the host delivers frames.
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    state: LoopState,
    interval: Duration,
}

impl AnimationLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: LoopState::Stopped,
            interval: clamp_interval(interval.as_millis() as u64),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stopped -> Running. Takes the reference timestamp now and requests
    /// the first frame. No-op when already running.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.is_running() {
            return;
        }
        let reference = scheduler.now();
        let pending = scheduler.request_frame();
        trace!(?reference, ?pending, "animation started");
        self.state = LoopState::Running { reference, pending };
    }

    /// Running -> Stopped. The outstanding request is cancelled; should the
    /// host deliver it anyway, `on_frame` drops it.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let LoopState::Running { pending, .. } = self.state {
            scheduler.cancel(pending);
            trace!(?pending, "animation stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Changes the tick interval. A running loop restarts its reference
    /// timestamp.
    pub fn set_interval<S: Scheduler + ?Sized>(&mut self, interval: Duration, scheduler: &mut S) {
        self.interval = clamp_interval(interval.as_millis() as u64);
        self.restart_reference(scheduler);
    }

    /// Counts the next full interval from now. No-op when stopped.
    pub fn restart_reference<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let LoopState::Running { reference, .. } = &mut self.state {
            *reference = scheduler.now();
        }
    }

    /// Host callback for `handle` delivered at `timestamp`. Runs `step`
    /// once if a full interval has elapsed since the last step.
    pub fn on_frame<S, F>(&mut self, scheduler: &mut S, handle: FrameHandle, timestamp: Duration, step: F) -> Frame
    where
        S: Scheduler + ?Sized,
        F: FnOnce(),
    {
        let LoopState::Running { reference, pending } = self.state else {
            return Frame::Ignored;
        };
        if handle != pending {
            return Frame::Ignored;
        }

        let elapsed = timestamp.saturating_sub(reference);
        let outcome = if elapsed >= self.interval {
            step();
            Frame::Stepped
        } else {
            Frame::Waiting
        };

        // Re-arm for the next frame
        let reference = if outcome == Frame::Stepped { timestamp } else { reference };
        let pending = scheduler.request_frame();
        self.state = LoopState::Running { reference, pending };
        outcome
    }
}
