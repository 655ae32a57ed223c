//! Active falling piece

use crate::shape::Shape;
use crate::types::{Color, GRID_WIDTH};

/// A tetromino instance: current orientation, color and grid offset of the
/// shape's top-left corner.
///
/// Mutations are unconditional; the caller validates with
/// [`collides`](crate::collision::collides) and rolls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centered, top row
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate 90 degrees clockwise in place (top-left corner stays put)
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Undo one [`Piece::rotate`]
    pub fn rotate_back(&mut self) {
        self.shape = self.shape.rotated_ccw();
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// `GRID_WIDTH / 2 - cols / 2`, both floored
pub fn spawn_x(shape: &Shape) -> i32 {
    GRID_WIDTH as i32 / 2 - shape.cols() as i32 / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use crate::types::CYAN;

    #[test]
    fn test_spawn_positions() {
        assert_eq!(Piece::new(ShapeKind::I.shape(), CYAN).x, 3);
        assert_eq!(Piece::new(ShapeKind::O.shape(), CYAN).x, 4);
        assert_eq!(Piece::new(ShapeKind::T.shape(), CYAN).x, 4);
        assert_eq!(Piece::new(ShapeKind::S.shape(), CYAN).y, 0);
    }

    #[test]
    fn test_move_is_unconditional() {
        let mut piece = Piece::new(ShapeKind::O.shape(), CYAN);
        piece.move_by(-10, 30);
        assert_eq!((piece.x, piece.y), (-6, 30));
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let mut piece = Piece::new(ShapeKind::O.shape(), CYAN);
        piece.move_by(0, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 5), (5, 5), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_rotate_back_restores_shape() {
        for kind in ShapeKind::ALL {
            let mut piece = Piece::new(kind.shape(), CYAN);
            piece.rotate();
            piece.rotate_back();
            assert_eq!(piece.shape, kind.shape(), "{kind:?}");
        }
    }
}
