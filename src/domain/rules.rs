//! Conway's Game of Life (B3/S23) on a bounded grid.
//!
//! Positions outside the grid count as dead: the board is zero-padded, never
//! wrapped, so border cells simply have fewer than eight neighbors.

use super::{Cell, Grid};

/// Count live cells among the eight Moore neighbors of (row, col)
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();

    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(|(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then(|| grid.get(r, c))
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Compute the next generation. The input is left untouched and the
/// returned grid is complete before the caller ever sees it.
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = grid
        .iter_cells()
        .map(|(row, col, cell)| cell.next_state(count_live_neighbors(grid, row, col)))
        .collect();

    Grid::from_cells(rows, cols, cells)
}
