use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Trait representing something which can tell the timer what time it is.
///
/// Times are f64 seconds rather than duration types: the timer only ever subtracts two readings and scales the result,
/// and the duration types start caring about a bunch of edge cases (negative spans, for one) that we want to clamp
/// instead.
///
/// Implementations should be monotonically increasing.  The timer tolerates a clock which goes backwards by treating
/// the elapsed time as 0, but the FPS windows will stall until the clock catches up again.
///
/// Any `Fn() -> f64` closure is a time source, so a host which already has a clock (a windowing library's timer, a
/// replay file, etc.) can hand it over directly.
pub trait TimeSource {
    /// Get the current time in seconds.
    fn get_time(&self) -> f64;
}

impl<F: Fn() -> f64> TimeSource for F {
    fn get_time(&self) -> f64 {
        self()
    }
}

/// A [TimeSource] backed by the process's monotonic clock, reading seconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn get_time(&self) -> f64 {
        (Instant::now() - self.epoch).as_secs_f64()
    }
}

/// A clock which only moves when told to.
///
/// Clones share the same reading, so a host can give one clone to a [crate::Timer] and keep another to drive it.  This
/// is what deterministic replays and the tests use.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        ManualClock {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, time: f64) {
        self.now.set(time);
    }

    /// Move the clock by `seconds`, which may be negative to simulate a rollback.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl TimeSource for ManualClock {
    fn get_time(&self) -> f64 {
        self.now.get()
    }
}
