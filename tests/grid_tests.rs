//! Grid and line-clear tests

use blockfall::core::Grid;
use blockfall::types::{BLUE, GREEN, GRID_HEIGHT, GRID_WIDTH, RED};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    for y in 0..GRID_HEIGHT as i32 {
        for x in 0..GRID_WIDTH as i32 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i32, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i32), None);
}

#[test]
fn test_clear_on_empty_grid_is_noop() {
    let mut grid = Grid::new();
    let cleared = grid.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_clear_without_full_rows_leaves_grid_unchanged() {
    let mut grid = Grid::new();
    grid.fill_row(19, RED);
    grid.set(3, 19, None);
    grid.set(7, 10, Some(GREEN));
    let before = grid.clone();

    assert!(grid.clear_full_rows().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_clearing_any_single_row() {
    for r in 0..GRID_HEIGHT as usize {
        let mut grid = Grid::new();
        grid.fill_row(r, RED);
        // Marker above the full row, if there is room
        if r > 0 {
            grid.set(2, r as i32 - 1, Some(BLUE));
        }

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[r]);
        assert!(grid.is_row_empty(0));
        assert_eq!(grid.cells().len(), 200);
        assert!((0..GRID_HEIGHT as usize).all(|y| !grid.is_row_full(y)));
        if r > 0 {
            assert_eq!(grid.get(2, r as i32), Some(Some(BLUE)));
        }
    }
}

#[test]
fn test_two_full_rows_shift_content_down_by_two() {
    let mut grid = Grid::new();
    grid.fill_row(5, RED);
    grid.fill_row(6, RED);
    grid.set(0, 4, Some(GREEN));
    grid.set(9, 4, Some(BLUE));
    grid.set(4, 19, Some(BLUE));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(cleared.as_slice(), &[5, 6]);

    assert_eq!(grid.get(0, 6), Some(Some(GREEN)));
    assert_eq!(grid.get(9, 6), Some(Some(BLUE)));
    assert!(grid.is_row_empty(4));
    assert!(grid.is_row_empty(0));
    assert!(grid.is_row_empty(1));
    // Rows below the cleared band stay put
    assert_eq!(grid.get(4, 19), Some(Some(BLUE)));
}

#[test]
fn test_non_adjacent_full_rows() {
    let mut grid = Grid::new();
    grid.fill_row(10, RED);
    grid.fill_row(19, RED);
    grid.set(1, 15, Some(GREEN));
    grid.set(1, 5, Some(BLUE));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[10, 19]);
    // Row 15 only had row 19 below it cleared
    assert_eq!(grid.get(1, 16), Some(Some(GREEN)));
    // Row 5 had both cleared rows below it
    assert_eq!(grid.get(1, 7), Some(Some(BLUE)));
    assert_eq!(grid.occupied().count(), 2);
}

#[test]
fn test_full_grid_clears_completely() {
    let mut grid = Grid::new();
    for y in 0..GRID_HEIGHT as usize {
        grid.fill_row(y, RED);
    }
    assert_eq!(grid.clear_full_rows().len(), GRID_HEIGHT as usize);
    assert_eq!(grid, Grid::new());
}
