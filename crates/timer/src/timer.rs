use log::*;

use crate::errors::{Error, Result};
use crate::time_source::{SystemClock, TimeSource};

/// How many seconds of ticks the default cap allows in one call.
const DEFAULT_MAX_TICK_SECONDS: f64 = 5.0;

/// Width of an FPS accounting window, in seconds.
const FPS_WINDOW: f64 = 1.0;

/// A fixed-timestep loop timer.
///
/// Call [Timer::advance_time] once per iteration of the host's main loop.  It converts the real time elapsed since the
/// previous call into a whole number of simulation ticks ([Timer::get_tick_count]) plus a fractional remainder
/// ([Timer::get_partial_tick]) which the renderer uses to interpolate between the previous and next simulation state:
///
/// ```
/// use tempo_timer::{ManualClock, Timer};
///
/// let clock = ManualClock::new(0.0);
/// let mut timer = Timer::new(20.0, clock.clone()).unwrap();
/// let mut game_ticks = 0;
///
/// clock.advance(0.125);
/// timer.advance_time();
/// timer.perform_ticks(|| game_ticks += 1);
/// assert_eq!(game_ticks, 2);
/// assert!((timer.get_partial_tick() - 0.5).abs() < 1e-9);
/// ```
///
/// Separately, [Timer::calc_fps] is called once per rendered frame and reports the frame count of every one-second
/// window which closes.
///
/// The timer is not synchronized.  The host must confine it to one loop.
#[derive(Debug)]
pub struct Timer<S = SystemClock> {
    source: S,
    ticks_per_second: f64,
    default_max_tick_count: u32,
    max_tick_count: u32,
    timescale: f64,

    last_time: f64,
    /// Accumulated tick debt, in ticks rather than seconds.
    passed_time: f64,
    delta_time: f64,
    partial_tick: f64,
    tick_count: u32,

    /// Clock time at which the current FPS window opened.
    accum_time: f64,
    frames: u32,
    last_fps: Option<u32>,
}

/// `floor(5 * ticks_per_second)`, saturating at the bounds of u32.
fn default_max_tick_count(ticks_per_second: f64) -> u32 {
    (DEFAULT_MAX_TICK_SECONDS * ticks_per_second).floor() as u32
}

fn validate_ticks_per_second(ticks_per_second: f64) -> Result<()> {
    if ticks_per_second.is_nan() || ticks_per_second <= 0.0 || ticks_per_second.is_infinite() {
        return Err(Error::InvalidTicksPerSecond(ticks_per_second));
    }
    Ok(())
}

impl Timer<SystemClock> {
    /// Build a timer driven by the process's monotonic clock.
    pub fn with_system_clock(ticks_per_second: f64) -> Result<Self> {
        Timer::new(ticks_per_second, SystemClock::new())
    }
}

impl<S: TimeSource> Timer<S> {
    /// Build a timer which runs `ticks_per_second` simulation ticks per second of clock time.
    ///
    /// Fails if `ticks_per_second` isn't finite and positive.  The clock is sampled once, and that reading opens both
    /// the first tick interval and the first FPS window.
    pub fn new(ticks_per_second: f64, source: S) -> Result<Self> {
        validate_ticks_per_second(ticks_per_second)?;

        let now = source.get_time();
        let default_max_tick_count = default_max_tick_count(ticks_per_second);

        Ok(Timer {
            source,
            ticks_per_second,
            default_max_tick_count,
            max_tick_count: default_max_tick_count,
            timescale: 1.0,
            last_time: now,
            passed_time: 0.0,
            delta_time: 0.0,
            partial_tick: 0.0,
            tick_count: 0,
            accum_time: now,
            frames: 0,
            last_fps: None,
        })
    }

    /// Read the clock and work out how many ticks the host should run this iteration.
    pub fn advance_time(&mut self) {
        let now = self.source.get_time();
        self.delta_time = now - self.last_time;
        self.last_time = now;

        if self.delta_time < 0.0 {
            debug!(
                "Clock went backwards by {} seconds; treating as no elapsed time",
                -self.delta_time
            );
        }

        // Clamp to [0, 1] so that one long stall can't pile up more than a second of debt.  NaN also lands on 0.
        let delta = if self.delta_time > 1.0 {
            1.0
        } else if self.delta_time >= 0.0 {
            self.delta_time
        } else {
            0.0
        };

        self.passed_time += delta * self.timescale * self.ticks_per_second;

        let ticks = self.passed_time.floor();
        if ticks > self.max_tick_count as f64 {
            debug!(
                "Behind by {} ticks; running {} this iteration",
                ticks, self.max_tick_count
            );
        }
        // The float to int cast saturates, and NaN becomes 0.
        self.tick_count = ticks.clamp(0.0, self.max_tick_count as f64) as u32;

        self.passed_time -= self.tick_count as f64;
        // Only a negative or NaN timescale gets us here.  Debt never runs backwards, so that's a pause.
        if self.passed_time.is_nan() || self.passed_time < 0.0 {
            self.passed_time = 0.0;
        }
        self.partial_tick = self.passed_time;
    }

    /// Run `action` once for each tick computed by the last [Timer::advance_time].
    pub fn perform_ticks(&self, mut action: impl FnMut()) {
        for _ in 0..self.tick_count {
            action();
        }
    }

    /// Count a rendered frame, closing any FPS windows which have ended.
    pub fn calc_fps(&mut self) {
        self.calc_fps_with(|_| {});
    }

    /// Count a rendered frame and pass the frame count of every FPS window which closed to `action`.
    ///
    /// If the host stalled for more than a second, every skipped window closes here in order; all but the first
    /// report 0.
    pub fn calc_fps_with(&mut self, mut action: impl FnMut(u32)) {
        self.frames = self.frames.saturating_add(1);

        let now = self.source.get_time();
        if !now.is_finite() {
            return;
        }

        // Windows advance by exactly their width instead of snapping to now, so they stay in phase with the first one.
        loop {
            let next = self.accum_time + FPS_WINDOW;
            // Past 2^53 seconds a window width no longer moves the boundary, so windows can't be measured.
            if next <= self.accum_time || now < next {
                break;
            }

            trace!("FPS window closed with {} frames", self.frames);
            action(self.frames);
            self.last_fps = Some(self.frames);
            self.accum_time = next;
            self.frames = 0;
        }
    }

    /// Forget everything that happened since the last iteration, as if the timer were created now.
    ///
    /// Use after a deliberate pause (loading, a modal dialog) so that the pause isn't billed to the simulation.
    /// Configuration and the last reported FPS are kept.
    pub fn reset(&mut self) {
        let now = self.source.get_time();
        self.last_time = now;
        self.accum_time = now;
        self.passed_time = 0.0;
        self.delta_time = 0.0;
        self.partial_tick = 0.0;
        self.tick_count = 0;
        self.frames = 0;
    }

    pub fn get_ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// The raw seconds between the last two [Timer::advance_time] calls, before clamping.  May be negative or large.
    pub fn get_delta_time(&self) -> f64 {
        self.delta_time
    }

    /// The number of frames counted so far in the current FPS window.
    ///
    /// This is the in-progress count, not the last reported one.  See [Timer::get_last_fps].
    pub fn get_frames_per_second(&self) -> u32 {
        self.frames
    }

    /// The frame count of the most recently closed FPS window, if any has closed yet.
    pub fn get_last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    /// Progress toward the next tick, for interpolation.
    ///
    /// In `[0, 1)` unless the tick cap truncated the last iteration, in which case the leftover debt shows up here too.
    pub fn get_partial_tick(&self) -> f64 {
        self.partial_tick
    }

    pub fn get_timescale(&self) -> f64 {
        self.timescale
    }

    pub fn get_tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn get_max_tick_count(&self) -> u32 {
        self.max_tick_count
    }

    pub fn get_default_max_tick_count(&self) -> u32 {
        self.default_max_tick_count
    }

    pub fn get_time_source(&self) -> &S {
        &self.source
    }

    /// Set the rate at which simulated time passes: 0 pauses, 2 is double speed.  Negative values also pause.
    pub fn set_timescale(&mut self, timescale: f64) {
        self.timescale = timescale;
    }

    /// Cap the ticks computed by one [Timer::advance_time].  0 restores the default of 5 seconds' worth.
    pub fn set_max_tick_count(&mut self, max_tick_count: u32) {
        self.max_tick_count = if max_tick_count > 0 {
            max_tick_count
        } else {
            self.default_max_tick_count
        };
    }
}
