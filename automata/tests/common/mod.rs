#![allow(dead_code)]

use std::time::Duration;

use automata::{Cell, FrameHandle, Grid, RandomSource, Renderer, Scheduler};

/// Remembers how often it was asked to paint and the last snapshot's size.
#[derive(Default)]
pub struct RecordingRenderer {
    pub paints: usize,
    pub last_dims: Option<(usize, usize)>,
}

impl Renderer for RecordingRenderer {
    fn render<C: Cell>(&mut self, grid: &Grid<C>) {
        self.paints += 1;
        self.last_dims = Some((grid.rows(), grid.cols()));
    }
}

/// Frame source driven by hand. Hands out increasing handles and keeps the
/// most recent request around so tests can deliver it.
#[derive(Default)]
pub struct ManualScheduler {
    pub now: Duration,
    pub next_id: u64,
    pub latest: Option<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn take(&mut self) -> FrameHandle {
        self.latest.take().expect("a frame was requested")
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.latest = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
        if self.latest == Some(handle) {
            self.latest = None;
        }
    }

    fn now(&self) -> Duration {
        self.now
    }
}

/// Hands out `first` for the first `count` draws, then `rest` forever.
pub struct Scripted {
    pub first: f64,
    pub count: usize,
    pub rest: f64,
    pub drawn: usize,
}

impl Scripted {
    pub fn new(first: f64, count: usize, rest: f64) -> Self {
        Self { first, count, rest, drawn: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        self.drawn += 1;
        if self.drawn <= self.count { self.first } else { self.rest }
    }
}
