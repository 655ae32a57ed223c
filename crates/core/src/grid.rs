//! Grid module - the playfield cell matrix
//!
//! The grid is 10x20, each cell empty or holding the color of a locked piece.
//! Flat row-major storage, no allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// Total number of cells on the grid
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one [`Grid::clear_full_rows`] call, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at (x, y), or None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_none()))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Fill every cell of row `y` with `color`. Returns false if out of bounds.
    pub fn fill_row(&mut self, y: usize, color: Color) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(Some(color));
        true
    }

    /// Remove every full row, shift the remaining rows down (keeping their
    /// order) and refill the top with empty rows.
    ///
    /// Returns the removed row indices, top to bottom; its length is the
    /// number of rows cleared. A grid without full rows is left untouched.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Two-pointer compaction, bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared.reverse();
        cleared
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied cells as (x, y, color), row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|color| ((idx % WIDTH) as i32, (idx / WIDTH) as i32, color))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
