//! Fixed simulator configuration.
//!
//! Nothing here is read from the command line or the environment; the
//! defaults are the only values the binary ever uses. Keeping them in one
//! struct lets tests build smaller sessions.

use std::time::Duration;

use crate::error::{Error, Result};

pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 600;
pub const TARGET_FPS: u32 = 30;
pub const CELL_SIZE: f32 = 10.0;
pub const LIVE_PROBABILITY: f64 = 0.1;
pub const WINDOW_TITLE: &str = "Cellular automata";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// Side length of one cell in pixels
    pub cell_size: f32,
    pub target_fps: u32,
    /// Chance that a cell of the pre-seeded grid starts alive
    pub live_probability: f64,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            target_fps: TARGET_FPS,
            live_probability: LIVE_PROBABILITY,
            window_title: WINDOW_TITLE.to_owned(),
        }
    }
}

impl Config {
    /// Reject values that would produce an empty grid or an unusable loop
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cell size must be a positive number of pixels, got {}",
                self.cell_size
            )));
        }
        if (self.window_width as f32) < self.cell_size || (self.window_height as f32) < self.cell_size {
            return Err(Error::InvalidConfig(format!(
                "window {}x{} cannot hold a single {}px cell",
                self.window_width, self.window_height, self.cell_size
            )));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidConfig("target fps must be at least 1".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(Error::InvalidConfig(format!(
                "live probability must be within [0, 1], got {}",
                self.live_probability
            )));
        }
        Ok(())
    }

    /// Grid size as (rows, cols); partial cells at the window edge are dropped
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let rows = (self.window_height as f32 / self.cell_size) as usize;
        let cols = (self.window_width as f32 / self.cell_size) as usize;
        (rows, cols)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    /// Instruction text is wrapped at this many characters per line
    pub fn text_wrap_width(&self) -> usize {
        (self.window_width / 20) as usize
    }
}
