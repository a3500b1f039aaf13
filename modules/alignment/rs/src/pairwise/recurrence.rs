use std::fmt::{Display, Formatter};

use itertools::iproduct;
use rayon::prelude::*;

use crate::pairwise::grid::{Cell, Grid, Pointer, Pointers, Tag};
use crate::pairwise::scoring::{gaps, symbols, Scheme};
use crate::pairwise::Error;
use crate::Score;

/// Alignment mode.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Mode {
    /// Needleman-Wunsch style: scores are never clamped
    #[default]
    Global,
    /// Smith-Waterman style: scores are clamped at 0 and a clamped cell restarts the alignment
    Local,
}

impl Mode {
    /// Parameter files use `0` for global alignment and any other token for local alignment.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "0" => Mode::Global,
            _ => Mode::Local,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Mode::Local)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Global => f.write_str("global"),
            Mode::Local => f.write_str("local"),
        }
    }
}

/// Epsilon-tolerant argmax: the cell keeps the best candidate score and *every* candidate within
/// the score tolerance of it.
///
/// In local mode a best score that is negative or zero (up to the tolerance) is stored as exactly
/// zero without predecessors - the alignment restarts there.
pub fn select<S: Score>(candidates: &[(Pointer, S)], mode: Mode) -> Cell<S> {
    debug_assert!(!candidates.is_empty());

    let best = candidates
        .iter()
        .fold(S::neg_infinity(), |best, (_, score)| best.max(*score));

    if mode.is_local() && best.is_nonpositive() {
        return Cell::origin(S::zero());
    }

    let pointers: Pointers = candidates
        .iter()
        .filter(|(_, score)| score.fuzzy_eq(best))
        .map(|(ptr, _)| *ptr)
        .collect();
    Cell::new(best, pointers)
}

/// The coupled affine-gap recurrence:
/// - `M[i][j]  = max(M, Ix, Iy at [i-1][j-1]) + s(a_i, b_j)`
/// - `Ix[i][j] = max(M[i-1][j] - dy, Ix[i-1][j] - ey)` (a_i against a gap)
/// - `Iy[i][j] = max(M[i][j-1] - dx, Iy[i][j-1] - ex)` (b_j against a gap)
pub struct Recurrence<'a, Sch: Scheme> {
    scheme: &'a Sch,
    mode: Mode,
}

impl<'a, S, A, B, Sch> Recurrence<'a, Sch>
where
    S: Score,
    Sch: Scheme<Score = S, Seq1Symbol = A, Seq2Symbol = B>,
{
    pub fn new(scheme: &'a Sch, mode: Mode) -> Self {
        Self { scheme, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Compute the M, Ix and Iy cells at an interior position. Only the upper, left and
    /// upper-left neighbours are read, so they must be filled already.
    pub fn update(
        &self,
        grid: &Grid<S>,
        seq1: &[A],
        seq2: &[B],
        row: usize,
        col: usize,
    ) -> Result<[Cell<S>; 3], Error> {
        debug_assert!(row > 0 && col > 0);
        let candidate = |tag: Tag, row: usize, col: usize, delta: S| {
            (Pointer::new(tag, row, col), grid.score(tag, row, col) + delta)
        };

        let substitution = symbols::Scorer::score(self.scheme, &seq1[row - 1], &seq2[col - 1])
            .map_err(|err| err.at(row, col))?;
        let m = select(
            &[
                candidate(Tag::M, row - 1, col - 1, substitution),
                candidate(Tag::Ix, row - 1, col - 1, substitution),
                candidate(Tag::Iy, row - 1, col - 1, substitution),
            ],
            self.mode,
        );

        let (dy, ey) = (
            gaps::Scorer::seq2_gap_open(self.scheme),
            gaps::Scorer::seq2_gap_extend(self.scheme),
        );
        let ix = select(
            &[
                candidate(Tag::M, row - 1, col, -dy),
                candidate(Tag::Ix, row - 1, col, -ey),
            ],
            self.mode,
        );

        let (dx, ex) = (
            gaps::Scorer::seq1_gap_open(self.scheme),
            gaps::Scorer::seq1_gap_extend(self.scheme),
        );
        let iy = select(
            &[
                candidate(Tag::M, row, col - 1, -dx),
                candidate(Tag::Iy, row, col - 1, -ex),
            ],
            self.mode,
        );

        Ok([m, ix, iy])
    }

    /// The first symbol pair without a substitution score in row-major order.
    fn first_failure(&self, seq1: &[A], seq2: &[B]) -> Option<Error> {
        iproduct!(1..=seq1.len(), 1..=seq2.len()).find_map(|(row, col)| {
            symbols::Scorer::score(self.scheme, &seq1[row - 1], &seq2[col - 1])
                .err()
                .map(|err| err.at(row, col))
        })
    }

    /// Row-major sweep over the interior of the grid. Stops at the first failed lookup.
    pub fn fill(&self, grid: &mut Grid<S>, seq1: &[A], seq2: &[B]) -> Result<(), Error> {
        debug_assert_eq!((grid.rows(), grid.cols()), (seq1.len() + 1, seq2.len() + 1));

        for row in 1..grid.rows() {
            for col in 1..grid.cols() {
                let cells = self.update(grid, seq1, seq2, row, col)?;
                grid.set(row, col, cells);
            }
        }
        Ok(())
    }
}

impl<'a, S, A, B, Sch> Recurrence<'a, Sch>
where
    S: Score,
    A: Sync,
    B: Sync,
    Sch: Scheme<Score = S, Seq1Symbol = A, Seq2Symbol = B> + Sync,
{
    /// Anti-diagonal sweep: cells with the same `row + col` are independent of each other and are
    /// computed in parallel on the current rayon pool. The result, including the reported lookup
    /// error, is identical to [Self::fill].
    pub fn fill_wavefront(&self, grid: &mut Grid<S>, seq1: &[A], seq2: &[B]) -> Result<(), Error> {
        debug_assert_eq!((grid.rows(), grid.cols()), (seq1.len() + 1, seq2.len() + 1));
        if grid.is_trivial() {
            return Ok(());
        }

        let (lastrow, lastcol) = (grid.rows() - 1, grid.cols() - 1);
        for diagonal in 2..=(lastrow + lastcol) {
            let first = diagonal.saturating_sub(lastcol).max(1);
            let last = (diagonal - 1).min(lastrow);

            let cells = {
                let grid = &*grid;
                (first..=last)
                    .into_par_iter()
                    .map(|row| self.update(grid, seq1, seq2, row, diagonal - row))
                    .collect::<Result<Vec<_>, Error>>()
            };
            // Lookups depend only on the symbols: report the failure the row-major sweep hits
            let cells = match cells {
                Ok(cells) => cells,
                Err(err) => return Err(self.first_failure(seq1, seq2).unwrap_or(err)),
            };
            for (row, cells) in (first..=last).zip(cells) {
                grid.set(row, diagonal - row, cells);
            }
        }
        Ok(())
    }
}
