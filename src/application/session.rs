use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::domain::{Grid, next_generation};
use crate::input::{self, Event, Key};
use crate::rendering::{self, BACKGROUND_COLOR, Surface};

pub const WELCOME_MESSAGE: &str = "- Welcome to Conway's Game of Life. \
    - Press Enter to generate a random set of cells, or press Space to enter your own using mouse clicks.";

pub const MANUAL_INTRO_MESSAGE: &str = "- Manual mode instructions:
    - Use mouse clicks to bring cells to life.
    - Click a live cell to kill it.
    - Hit space to start inputting cells.
    - Hit space again to start the simulation.";

/// Phase of the session. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Welcome screen, choosing between random and manual seeding
    #[default]
    Initializing,
    ManualIntro,
    ManualEditing,
    Simulating,
}

/// Whether the main loop should keep running after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Session owns the grid and drives the mode state machine.
/// One frame = drain input, draw, then advance the simulation.
pub struct Session {
    mode: Mode,
    active_grid: Grid,
    /// Pre-seeded random grid, handed over when random simulation starts
    seeded_grid: Option<Grid>,
    generation: u64,
    cell_size: f32,
    wrap_width: usize,
}

impl Session {
    /// Start in `Initializing` with a blank grid and a freshly seeded one
    pub fn new<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let (rows, cols) = config.grid_dimensions();
        let blank = Grid::new(rows, cols);
        let seeded = Grid::random(rows, cols, config.live_probability, rng);
        Self::with_grids(blank, seeded, config.cell_size, config.text_wrap_width())
    }

    pub fn with_grids(blank: Grid, seeded: Grid, cell_size: f32, wrap_width: usize) -> Self {
        debug_assert_eq!(blank.dimensions(), seeded.dimensions());
        Self {
            mode: Mode::Initializing,
            active_grid: blank,
            seeded_grid: Some(seeded),
            generation: 0,
            cell_size,
            wrap_width,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn grid(&self) -> &Grid {
        &self.active_grid
    }

    pub fn seeded_grid(&self) -> Option<&Grid> {
        self.seeded_grid.as_ref()
    }

    fn enter(&mut self, mode: Mode) {
        info!(from = ?self.mode, to = ?mode, "mode transition");
        self.mode = mode;
    }

    /// Apply one input event to the state machine
    pub fn handle_event(&mut self, event: Event) -> FrameOutcome {
        match (self.mode, event) {
            (_, Event::Quit | Event::KeyDown(Key::Escape)) => {
                info!(mode = ?self.mode, generation = self.generation, "terminate requested");
                return FrameOutcome::Quit;
            }
            (Mode::Initializing, Event::KeyDown(Key::Enter)) => {
                if let Some(seeded) = self.seeded_grid.take() {
                    self.active_grid = seeded;
                }
                self.generation = 0;
                info!(alive = self.active_grid.count_alive(), "starting random simulation");
                self.enter(Mode::Simulating);
            }
            (Mode::Initializing, Event::KeyDown(Key::Space)) => self.enter(Mode::ManualIntro),
            (Mode::ManualIntro, Event::KeyDown(Key::Space)) => self.enter(Mode::ManualEditing),
            (Mode::ManualEditing, Event::PointerUp { x, y }) => {
                if input::toggle_cell_at_pixel(x, y, self.cell_size, &mut self.active_grid).is_none() {
                    debug!(x, y, "click outside grid ignored");
                }
            }
            (Mode::ManualEditing, Event::KeyDown(Key::Space)) => {
                self.generation = 0;
                info!(alive = self.active_grid.count_alive(), "starting manual simulation");
                self.enter(Mode::Simulating);
            }
            (mode, event) => trace!(?mode, ?event, "event ignored"),
        }
        FrameOutcome::Continue
    }

    /// Apply events in order, stopping at the first terminate
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = Event>) -> FrameOutcome {
        for event in events {
            if self.handle_event(event) == FrameOutcome::Quit {
                return FrameOutcome::Quit;
            }
        }
        FrameOutcome::Continue
    }

    /// Draw what the current mode shows
    pub fn render(&self, surface: &mut impl Surface) {
        match self.mode {
            Mode::Initializing => rendering::draw_message(surface, WELCOME_MESSAGE, self.wrap_width),
            Mode::ManualIntro => rendering::draw_message(surface, MANUAL_INTRO_MESSAGE, self.wrap_width),
            Mode::ManualEditing => {
                rendering::draw_cells(surface, &self.active_grid, self.cell_size);
                let (x, y) = surface.pointer_position();
                if let Some(cell) = input::pixel_to_cell(x, y, self.cell_size, &self.active_grid) {
                    rendering::draw_hover(surface, cell, self.cell_size);
                }
            }
            Mode::Simulating => {
                rendering::draw_cells(surface, &self.active_grid, self.cell_size);
                rendering::draw_generation_count(surface, self.generation);
            }
        }
    }

    /// Step the automaton once if simulating. The next grid is fully built
    /// before it replaces the active one.
    pub fn advance(&mut self) {
        if self.mode != Mode::Simulating {
            return;
        }
        let next = next_generation(&self.active_grid);
        self.active_grid = next;
        self.generation += 1;
        trace!(generation = self.generation, alive = self.active_grid.count_alive(), "generation advanced");
    }

    /// Run one frame against the surface. Presenting and throttling are up to the caller.
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameOutcome {
        let events = surface.poll_events();
        if self.handle_events(events) == FrameOutcome::Quit {
            return FrameOutcome::Quit;
        }

        surface.clear_frame(BACKGROUND_COLOR);
        self.render(surface);
        self.advance();
        FrameOutcome::Continue
    }
}
