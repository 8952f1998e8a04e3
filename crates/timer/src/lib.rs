//! A fixed-timestep loop timer.
//!
//! The host calls [Timer::advance_time] once per iteration of its main loop, runs [Timer::get_tick_count] simulation
//! ticks (see [Timer::perform_ticks]), renders using [Timer::get_partial_tick] to interpolate, and finally calls
//! [Timer::calc_fps] to count the frame.  Simulation rate is fixed; render rate is whatever the host manages.
mod builder;
mod config;
mod errors;
mod time_source;
mod timer;

#[cfg(test)]
mod tests;

pub use builder::*;
pub use config::*;
pub use errors::*;
pub use time_source::*;
pub use timer::*;
