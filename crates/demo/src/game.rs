//! A stand-in for a real game: it counts ticks and pretends to render.
use log::*;

use tempo_timer::{TimeSource, Timer};

#[derive(Debug, Default)]
pub struct DemoGame {
    pub game_ticks: u64,
    pub frames_rendered: u64,
    pub fps_reports: Vec<u32>,
    /// The partial tick the last frame was rendered with.
    pub last_alpha: f64,
}

impl DemoGame {
    pub fn new() -> Self {
        Default::default()
    }

    fn tick(&mut self) {
        self.game_ticks += 1;
        debug!("Game tick {}", self.game_ticks);
    }

    fn render(&mut self, alpha: f64) {
        self.frames_rendered += 1;
        self.last_alpha = alpha;
        trace!("Render frame {} at alpha {:.3}", self.frames_rendered, alpha);
    }

    fn on_fps(&mut self, fps: u32) {
        info!("FPS: {} (ticks so far: {})", fps, self.game_ticks);
        self.fps_reports.push(fps);
    }

    /// One iteration of the host loop.
    pub fn run_frame<S: TimeSource>(&mut self, timer: &mut Timer<S>) {
        timer.advance_time();
        timer.perform_ticks(|| self.tick());
        self.render(timer.get_partial_tick());
        timer.calc_fps_with(|fps| self.on_fps(fps));
    }
}
