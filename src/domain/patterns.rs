use super::{Cell, Grid};

/// A small arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>,  // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { height, width, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at (row, col).
    /// Panics if the pattern does not fit.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Classic seed patterns
pub mod presets {
    use super::*;

    /// Glider - moves one cell down and right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(vec![(1, 0), (1, 1), (1, 2)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_boxes() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));

        let block = presets::block();
        assert_eq!((block.height, block.width), (2, 2));
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let mut grid = Grid::new(10, 10);
        presets::glider().place_on(&mut grid, 2, 3);
        assert_eq!(grid.live_cells(), vec![(2, 4), (3, 5), (4, 3), (4, 4), (4, 5)]);
    }
}
