pub use matrix::Matrix;
pub use pointer::{Pointer, Pointers, Tag};

use derive_more::Constructor;
use itertools::iproduct;

use crate::Score;

mod matrix;
mod pointer;

/// A single dynamic programming cell: its best score and every predecessor achieving it.
#[derive(Copy, Clone, PartialEq, Debug, Constructor)]
pub struct Cell<S: Score> {
    pub score: S,
    pub pointers: Pointers,
}

impl<S: Score> Cell<S> {
    /// A cell without predecessors: boundary cells and local alignment restarts.
    pub fn origin(score: S) -> Self {
        Self::new(score, Pointers::new())
    }
}

/// Arena holding the three coupled matrices (M, Ix, Iy), each sized `(len1 + 1) x (len2 + 1)`.
///
/// Boundary cells (row 0 and column 0) are fixed on construction:
/// - M is 0 everywhere on the boundary, so alignments may start anywhere along it for free;
/// - Ix and Iy are -inf on the boundary, so no alignment may start inside a gap.
///
/// Interior cells must be populated in increasing (row, col) order, or by anti-diagonals, because
/// each cell only depends on its left, upper and upper-left neighbours.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid<S: Score> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<S>>,
}

impl<S: Score> Grid<S> {
    pub fn new(len1: usize, len2: usize) -> Self {
        let (rows, cols) = (len1 + 1, len2 + 1);
        let block = rows * cols;

        let mut cells = Vec::with_capacity(block * Tag::ALL.len());
        cells.resize(block, Cell::origin(S::zero()));
        cells.resize(block * Tag::ALL.len(), Cell::origin(S::neg_infinity()));

        Self { rows, cols, cells }
    }

    /// Number of rows in each matrix, i.e. the length of the first sequence + 1.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in each matrix, i.e. the length of the second sequence + 1.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if there are no interior cells (one of the sequences is empty).
    pub fn is_trivial(&self) -> bool {
        self.rows < 2 || self.cols < 2
    }

    #[inline(always)]
    fn offset(&self, tag: Tag, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        tag.index() * self.rows * self.cols + row * self.cols + col
    }

    #[inline(always)]
    pub fn at(&self, tag: Tag, row: usize, col: usize) -> &Cell<S> {
        &self.cells[self.offset(tag, row, col)]
    }

    #[inline(always)]
    pub fn cell(&self, ptr: &Pointer) -> &Cell<S> {
        self.at(ptr.tag, ptr.row, ptr.col)
    }

    #[inline(always)]
    pub fn score(&self, tag: Tag, row: usize, col: usize) -> S {
        self.at(tag, row, col).score
    }

    #[inline(always)]
    pub fn pointers(&self, tag: Tag, row: usize, col: usize) -> &Pointers {
        &self.at(tag, row, col).pointers
    }

    /// Store the computed M, Ix and Iy cells for the given interior position.
    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cells: [Cell<S>; 3]) {
        debug_assert!(row > 0 && col > 0, "Boundary cells are immutable");
        for (tag, cell) in Tag::ALL.into_iter().zip(cells) {
            let offset = self.offset(tag, row, col);
            self.cells[offset] = cell;
        }
    }

    /// Interior positions in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(1..self.rows, 1..self.cols)
    }

    /// Read-only view of a single matrix, mostly for debugging.
    pub fn matrix(&self, tag: Tag) -> Matrix<'_, S> {
        Matrix::new(self, tag)
    }
}
