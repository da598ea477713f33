use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods, MouseButton};
use macroquad::input::is_quit_requested;
use tracing::debug;

use crate::domain::Grid;

/// Keys the session reacts to; everything else arrives as `Other`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter | KeyCode::KpEnter => Key::Enter,
            KeyCode::Space => Key::Space,
            KeyCode::Escape => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Input delivered to the session, in arrival order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    PointerUp { x: f32, y: f32 },
}

/// Map a pixel position to a grid cell and flip it.
///
/// Returns the (row, col) that was toggled, or `None` when the position is
/// outside the grid. Clicks in the margin are not an error.
pub fn toggle_cell_at_pixel(x: f32, y: f32, cell_size: f32, grid: &mut Grid) -> Option<(usize, usize)> {
    let (row, col) = pixel_to_cell(x, y, cell_size, grid)?;
    let cell = grid.toggle(row, col);
    debug!(row, col, alive = cell.is_alive(), "toggled cell");
    Some((row, col))
}

/// Grid cell under a pixel position, if any
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32, grid: &Grid) -> Option<(usize, usize)> {
    if !(x.is_finite() && y.is_finite() && cell_size > 0.0) || x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / cell_size).floor() as usize;
    let row = (y / cell_size).floor() as usize;
    grid.contains(row, col).then_some((row, col))
}

/// Raw window input converted to `Event`s, oldest first.
///
/// Key repeats are dropped; a release of any mouse button counts as a click.
#[derive(Debug, Default)]
pub struct EventBuffer {
    pending: Vec<Event>,
}

impl EventBuffer {
    pub fn push_quit(&mut self) {
        self.pending.push(Event::Quit);
    }

    /// Hand over everything buffered so far
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }
}

impl EventHandler for EventBuffer {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.pending.push(Event::KeyDown(Key::from(keycode)));
        }
    }

    fn mouse_button_up_event(&mut self, _button: MouseButton, x: f32, y: f32) {
        self.pending.push(Event::PointerUp { x, y });
    }
}

/// Collects window input between frames without losing its order.
///
/// macroquad's `is_key_pressed` family only answers per-frame yes/no
/// questions, so this registers its own input subscriber and replays the raw
/// miniquad events into an `EventBuffer` instead.
pub struct EventQueue {
    subscriber: usize,
    buffer: EventBuffer,
}

impl EventQueue {
    /// Needs a live macroquad context
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            buffer: EventBuffer::default(),
        }
    }

    /// Drain everything that arrived since the last call. Never blocks.
    pub fn drain(&mut self) -> Vec<Event> {
        repeat_all_miniquad_input(&mut self.buffer, self.subscriber);
        if is_quit_requested() {
            self.buffer.push_quit();
        }
        self.buffer.take()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
