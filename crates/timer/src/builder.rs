use crate::errors::{Error, Result};
use crate::time_source::TimeSource;
use crate::timer::Timer;

/// Builds a [Timer] with non-default settings, validating them up front.
#[derive(Debug, Default, Clone)]
pub struct TimerBuilder {
    ticks_per_second: Option<f64>,
    timescale: Option<f64>,
    max_tick_count: Option<u32>,
}

impl TimerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn ticks_per_second(mut self, ticks_per_second: f64) -> Self {
        self.ticks_per_second = Some(ticks_per_second);
        self
    }

    pub fn timescale(mut self, timescale: f64) -> Self {
        self.timescale = Some(timescale);
        self
    }

    /// Cap ticks per iteration.  0, like leaving it unset, means 5 seconds' worth of ticks.
    pub fn max_tick_count(mut self, max_tick_count: u32) -> Self {
        self.max_tick_count = Some(max_tick_count);
        self
    }

    pub fn build<S: TimeSource>(self, source: S) -> Result<Timer<S>> {
        let ticks_per_second = self
            .ticks_per_second
            .ok_or(Error::MissingTicksPerSecond)?;

        let timescale = self.timescale.unwrap_or(1.0);
        if !timescale.is_finite() {
            return Err(Error::InvalidTimescale(timescale));
        }

        let mut timer = Timer::new(ticks_per_second, source)?;
        timer.set_timescale(timescale);
        if let Some(max_tick_count) = self.max_tick_count {
            timer.set_max_tick_count(max_tick_count);
        }

        Ok(timer)
    }
}
