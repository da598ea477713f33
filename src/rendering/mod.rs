use macroquad::prelude::*;
use macroquad::input::prevent_quit;

use crate::domain::Grid;
use crate::input::{Event, EventQueue};

pub const ALIVE_COLOR: Color = BLACK;
pub const DEAD_COLOR: Color = WHITE;
pub const BACKGROUND_COLOR: Color = BLACK;
pub const MESSAGE_COLOR: Color = WHITE;
pub const COUNTER_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const HOVER_COLOR: Color = Color::new(1.0, 0.25, 0.25, 1.0);
pub const HOVER_THICKNESS: f32 = 2.0;

pub const MESSAGE_FONT_SIZE: f32 = 30.0;
pub const MESSAGE_LINE_SPACING: f32 = 30.0;
pub const COUNTER_FONT_SIZE: f32 = 22.0;
pub const TEXT_ORIGIN: (f32, f32) = (30.0, 30.0);

/// Everything the session needs from the window: drawing and input.
/// Presenting the frame is left to the main loop.
pub trait Surface {
    fn clear_frame(&mut self, color: Color);

    fn draw_filled_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Rectangle border only; whatever is inside stays visible
    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32, color: Color);

    /// Draw lines top to bottom starting at `position` (top-left of the first line)
    fn draw_text(&mut self, lines: &[String], position: (f32, f32), font_size: f32, color: Color, line_spacing: f32);

    /// Input that arrived since the previous call, oldest first
    fn poll_events(&mut self) -> Vec<Event>;

    fn pointer_position(&self) -> (f32, f32);
}

/// `Surface` backed by macroquad's immediate-mode drawing
pub struct MacroquadSurface {
    events: EventQueue,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        // Window close is reported as an event instead of killing the process
        prevent_quit();
        Self { events: EventQueue::new() }
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MacroquadSurface {
    fn clear_frame(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_filled_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        draw_rectangle(x, y, width, height, color);
    }

    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32, color: Color) {
        draw_rectangle_lines(x, y, width, height, thickness, color);
    }

    fn draw_text(&mut self, lines: &[String], position: (f32, f32), font_size: f32, color: Color, line_spacing: f32) {
        let (x, mut y) = position;
        for line in lines {
            // macroquad positions text by its baseline
            draw_text(line, x, y + font_size, font_size, color);
            y += line_spacing;
        }
    }

    fn poll_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    fn pointer_position(&self) -> (f32, f32) {
        mouse_position()
    }
}

/// Draw every cell as a filled square, row by row
pub fn draw_cells(surface: &mut impl Surface, grid: &Grid, cell_size: f32) {
    for (row, col, cell) in grid.iter_cells() {
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        surface.draw_filled_rect(col as f32 * cell_size, row as f32 * cell_size, cell_size, cell_size, color);
    }
}

/// Outline the cell under the pointer. Drawn after the cells, so the cell's
/// own state still shows through.
pub fn draw_hover(surface: &mut impl Surface, (row, col): (usize, usize), cell_size: f32) {
    surface.draw_rect_outline(
        col as f32 * cell_size,
        row as f32 * cell_size,
        cell_size,
        cell_size,
        HOVER_THICKNESS,
        HOVER_COLOR,
    );
}

pub fn draw_message(surface: &mut impl Surface, message: &str, wrap_width: usize) {
    let lines = wrap_text(message, wrap_width);
    surface.draw_text(&lines, TEXT_ORIGIN, MESSAGE_FONT_SIZE, MESSAGE_COLOR, MESSAGE_LINE_SPACING);
}

pub fn draw_generation_count(surface: &mut impl Surface, generation: u64) {
    let lines = [format!("Generation count: {}", generation)];
    surface.draw_text(&lines, TEXT_ORIGIN, COUNTER_FONT_SIZE, COUNTER_COLOR, COUNTER_FONT_SIZE);
}

/// Greedy word wrap. Explicit newlines start a new paragraph; words longer
/// than `width` get a line of their own.
pub fn wrap_text(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in message.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() { word.len() } else { current.len() + 1 + word.len() };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
