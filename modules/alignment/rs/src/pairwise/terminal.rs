use crate::pairwise::grid::{Grid, Tag};
use crate::Score;

/// Strategy choosing the M cells where traceback starts (the last aligned column).
///
/// Returns the optimal score and the terminal positions in row-major order. A grid without
/// interior cells has score 0 and no terminals.
pub trait Terminals<S: Score>: Send + Sync {
    fn select(&self, grid: &Grid<S>) -> (S, Vec<(usize, usize)>);
}

/// Every interior M cell within the score tolerance of the maximum. Used for both modes, which
/// lets global alignments end anywhere (the trailing parts of both sequences are free).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct WholeMatrix;

impl<S: Score> Terminals<S> for WholeMatrix {
    fn select(&self, grid: &Grid<S>) -> (S, Vec<(usize, usize)>) {
        if grid.is_trivial() {
            return (S::zero(), Vec::new());
        }

        let best = grid
            .interior()
            .fold(S::neg_infinity(), |best, (row, col)| {
                best.max(grid.score(Tag::M, row, col))
            });
        let terminals = grid
            .interior()
            .filter(|&(row, col)| grid.score(Tag::M, row, col).fuzzy_eq(best))
            .collect();
        (best, terminals)
    }
}

/// Only the bottom-right M cell: strict global alignment consuming both sequences entirely.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct BottomRight;

impl<S: Score> Terminals<S> for BottomRight {
    fn select(&self, grid: &Grid<S>) -> (S, Vec<(usize, usize)>) {
        if grid.is_trivial() {
            return (S::zero(), Vec::new());
        }

        let (row, col) = (grid.rows() - 1, grid.cols() - 1);
        (grid.score(Tag::M, row, col), vec![(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise::grid::Cell;

    fn grid(scores: &[[f64; 3]; 2]) -> Grid<f64> {
        let mut grid = Grid::new(2, 3);
        for (row, values) in scores.iter().enumerate() {
            for (col, score) in values.iter().enumerate() {
                grid.set(
                    row + 1,
                    col + 1,
                    [Cell::origin(*score), Cell::origin(0.0), Cell::origin(0.0)],
                );
            }
        }
        grid
    }

    #[test]
    fn test_whole_matrix() {
        let grid = grid(&[[1.0, 3.0, 2.0], [3.0 - 1e-7, 0.5, 3.0]]);
        let (score, terminals) = WholeMatrix.select(&grid);
        assert_eq!(score, 3.0);
        assert_eq!(terminals, vec![(1, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn test_bottom_right() {
        let grid = grid(&[[1.0, 3.0, 2.0], [3.0, 0.5, -1.0]]);
        assert_eq!(BottomRight.select(&grid), (-1.0, vec![(2, 3)]));
    }

    #[test]
    fn test_trivial_grid() {
        for grid in [Grid::<f64>::new(0, 4), Grid::<f64>::new(4, 0)] {
            assert_eq!(WholeMatrix.select(&grid), (0.0, vec![]));
            assert_eq!(BottomRight.select(&grid), (0.0, vec![]));
        }
    }
}
