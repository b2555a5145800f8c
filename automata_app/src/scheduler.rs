// scheduler.rs - Host frame sources: egui repaints and a tokio ticker

use std::time::{Duration, Instant};

use automata::{FrameHandle, Scheduler};
use eframe::egui;

/// Remembers the one outstanding request until the host delivers it.
#[derive(Debug, Default)]
struct Pending {
    next_id : u64,
    handle  : Option<FrameHandle>,
}

impl Pending {
    fn request(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.handle = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.handle == Some(handle) {
            self.handle = None;
        }
    }
}

/// Frames are egui repaints: requesting one asks the context to repaint and
/// the next `update` delivers it.
pub struct RepaintScheduler {
    ctx     : egui::Context,
    origin  : Instant,
    pending : Pending,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, origin: Instant::now(), pending: Pending::default() }
    }

    /// The request due for delivery in this `update`, if any.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.handle.take()
    }
}

impl Scheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.ctx.request_repaint();
        self.pending.request()
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.cancel(handle);
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Frames are ticks of a `tokio::time::Interval` owned by the driver.
pub struct TickScheduler {
    origin  : tokio::time::Instant,
    pending : Pending,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { origin: tokio::time::Instant::now(), pending: Pending::default() }
    }

    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.handle.take()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.pending.request()
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.cancel(handle);
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
