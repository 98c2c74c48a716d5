/// Row-major boolean matrix. `true` cells are ink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitmap {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Bitmap {
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        assert_eq!(rows * cols, cells.len());
        Self { rows, cols, cells }
    }

    pub fn blank(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![false; rows * cols] }
    }

    /// Build a bitmap from text rows where `#` marks ink and any other byte is background.
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(rows * cols);
        for row in pattern {
            assert_eq!(row.len(), cols, "pattern rows must have equal width");
            cells.extend(row.bytes().map(|byte| byte == b'#'));
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value at `(row, col)`. Anything outside the matrix reads as background.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Positions of all ink cells as `(row, col)`.
    pub fn ink(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Append the columns of `other` to the right of `self`, row by row.
    ///
    /// An empty bitmap takes on the shape of `other`.
    pub fn append_columns(&mut self, other: &Bitmap) {
        if self.rows == 0 {
            *self = other.clone();
            return;
        }

        assert_eq!(self.rows, other.rows, "appended bitmap must have the same row count");
        let cols = self.cols + other.cols;
        let mut cells = Vec::with_capacity(self.rows * cols);
        for row in 0..self.rows {
            cells.extend_from_slice(self.row(row));
            cells.extend_from_slice(other.row(row));
        }
        self.cols = cols;
        self.cells = cells;
    }

    /// Render as text rows using `on` for ink and `off` for background.
    pub fn text_rows(&self, on: char, off: char) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |row| {
            self.row(row).iter().map(|&cell| if cell { on } else { off }).collect()
        })
    }
}
