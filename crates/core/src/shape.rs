//! Shape module - tetromino occupancy matrices and the 7-entry catalog
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation is the plain
//! matrix transform: clockwise is the transpose of the vertically reversed
//! matrix, so the bounding box swaps rows and columns and there are no
//! pivot offsets or kick tables.

/// Largest side of any tetromino bounding box
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix with an explicit bounding box.
///
/// Cells outside `rows x cols` are always false, so two shapes compare equal
/// exactly when their visible matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values, top to bottom.
    ///
    /// # Panics
    ///
    /// If the layout is empty, larger than 4x4, or ragged. Catalog entries are
    /// checked at compile time.
    pub const fn from_layout(layout: &[&[u8]]) -> Self {
        let rows = layout.len();
        assert!(rows > 0 && rows <= MAX_SHAPE_DIM, "shape needs 1..=4 rows");
        let cols = layout[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "shape needs 1..=4 cols");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < rows {
            assert!(layout[r].len() == cols, "ragged shape layout");
            let mut c = 0;
            while c < cols {
                cells[r][c] = layout[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (col, row) is occupied; false outside the bounding box
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as (col, row) offsets from the top-left corner, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows as usize).flat_map(move |row| {
            (0..self.cols as usize)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i32, row as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// 90 degrees clockwise
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows as usize, self.cols as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// 90 degrees counter-clockwise; exact inverse of [`Shape::rotated_cw`]
    pub fn rotated_ccw(&self) -> Self {
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(self.rows as usize) {
                *out = self.cells[j][cols - 1 - i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The seven tetromino layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// Catalog order; spawn draws an index into this table
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Spawn orientation of this kind
    pub fn shape(self) -> Shape {
        SHAPES[self as usize]
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }
}

/// Spawn orientations, indexed by `ShapeKind as usize`
pub const SHAPES: [Shape; 7] = [
    Shape::from_layout(&[&[1, 1, 1, 1]]),
    Shape::from_layout(&[&[1, 1], &[1, 1]]),
    Shape::from_layout(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape::from_layout(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape::from_layout(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape::from_layout(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape::from_layout(&[&[0, 1, 1], &[1, 1, 0]]),
];
