// config.rs - Boundary clamping for grid size and tick interval

use std::time::Duration;

use crate::grid::{Dimensions, FALLBACK_SIDE, MAX_SIDE, MIN_SIDE};

pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_INTERVAL_MS: u64 = 100;             // Start-up value and parse fallback

/// Everything a controller needs to know about its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dims: Dimensions,
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dims: Dimensions::default(),
            tick_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl Settings {
    pub fn new(rows: usize, cols: usize, interval_ms: u64) -> Self {
        Self::default()
            .with_dims(Dimensions::clamped(rows, cols))
            .with_interval_ms(interval_ms)
    }

    pub fn with_dims(mut self, dims: Dimensions) -> Self {
        self.dims = Dimensions::clamped(dims.rows, dims.cols);
        self
    }

    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval = clamp_interval(ms);
        self
    }

    pub fn interval_ms(&self) -> u64 {
        self.tick_interval.as_millis() as u64
    }
}

pub fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
}

/// Leading integer of `text`, ignoring whatever follows the digits:
/// "12.5" and "12px" both read as 12. Overlong digit runs saturate.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Rows/cols from free text. Non-numeric, empty or zero input gives
/// `FALLBACK_SIDE`; anything else is clamped into range.
pub fn parse_dimension(text: &str) -> usize {
    match leading_integer(text) {
        Some(n) if n != 0 => (n.max(0) as usize).clamp(MIN_SIDE, MAX_SIDE),
        _ => FALLBACK_SIDE,
    }
}

/// Tick interval from free text, same fallback rules as `parse_dimension`
/// with `DEFAULT_INTERVAL_MS` as the fallback.
pub fn parse_interval_ms(text: &str) -> u64 {
    let ms = match leading_integer(text) {
        Some(n) if n != 0 => n.max(0) as u64,
        _ => DEFAULT_INTERVAL_MS,
    };
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}
