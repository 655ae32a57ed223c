//! Collision and placement
//!
//! [`collides`] is the single bounds gatekeeper for piece writes; [`merge`]
//! trusts that it returned false for the same piece and grid.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// True if any occupied cell is left of the grid, right of it, below the
/// bottom row, or on a filled grid cell.
///
/// Cells above the top row (negative y) only get the horizontal check.
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 {
            return true;
        }
        y >= 0 && grid.is_occupied(x, y)
    })
}

/// Write the piece color into every grid cell it covers.
///
/// Cells outside the grid are skipped.
pub fn merge(piece: &Piece, grid: &mut Grid) {
    for (x, y) in piece.cells() {
        grid.set(x, y, Some(piece.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use crate::types::{BLUE, RED};

    #[test]
    fn test_empty_grid_spawn_is_free() {
        let grid = Grid::new();
        for kind in ShapeKind::ALL {
            assert!(!collides(&Piece::new(kind.shape(), RED), &grid));
        }
    }

    #[test]
    fn test_walls_and_floor() {
        let grid = Grid::new();
        let mut piece = Piece::new(ShapeKind::O.shape(), RED);

        piece.x = -1;
        assert!(collides(&piece, &grid));
        piece.x = 9;
        assert!(collides(&piece, &grid));
        piece.x = 8;
        assert!(!collides(&piece, &grid));

        piece.y = 18;
        assert!(!collides(&piece, &grid));
        piece.y = 19;
        assert!(collides(&piece, &grid));
    }

    #[test]
    fn test_above_top_is_not_a_collision() {
        let mut grid = Grid::new();
        grid.fill_row(0, BLUE);

        let mut piece = Piece::new(ShapeKind::I.shape().rotated_cw(), RED);
        piece.y = -4;
        assert!(!collides(&piece, &grid));

        piece.y = -3;
        assert!(collides(&piece, &grid));

        piece.y = -4;
        piece.x = -1;
        assert!(collides(&piece, &grid));
    }

    #[test]
    fn test_filled_cell_collides() {
        let mut grid = Grid::new();
        grid.set(5, 1, Some(BLUE));

        // T spawns at x=4: cells (4,0) (5,0) (6,0) (5,1)
        let piece = Piece::new(ShapeKind::T.shape(), RED);
        assert!(collides(&piece, &grid));
    }

    #[test]
    fn test_merge_skips_cells_outside_grid() {
        let mut grid = Grid::new();
        let mut piece = Piece::new(ShapeKind::I.shape().rotated_cw(), RED);
        piece.y = -2;
        merge(&piece, &mut grid);

        assert_eq!(grid.get(piece.x, 0), Some(Some(RED)));
        assert_eq!(grid.get(piece.x, 1), Some(Some(RED)));
        assert_eq!(grid.occupied().count(), 2);
    }
}
