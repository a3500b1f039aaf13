use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::pairwise::grid::Tag;
use crate::pairwise::traceback::Path;

/// Symbol emitted in place of a missing character.
pub const GAP: char = '_';

/// A pair of equal-length, gap-padded rows.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Getters, Dissolve, Constructor)]
pub struct Alignment {
    seq1: String,
    seq2: String,
}

/// Column statistics of an alignment.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Summary {
    pub columns: usize,
    pub matches: usize,
    pub mismatches: usize,
    /// Columns with a gap in either row
    pub gaps: usize,
    /// Maximal runs of consecutive gaps, counted separately in each row
    pub gap_runs: usize,
}

impl Alignment {
    /// Render a traceback path. The path is read from its start to the terminal:
    /// - M emits `seq1[row]` against `seq2[col]`;
    /// - Ix emits `seq1[row]` against a gap;
    /// - Iy emits a gap against `seq2[col]`.
    ///
    /// Boundary pointers emit nothing.
    pub fn emit<A, B>(path: &Path, seq1: &[A], seq2: &[B]) -> Self
    where
        A: Copy + Into<char>,
        B: Copy + Into<char>,
    {
        let mut alignment = Alignment::default();
        for step in path.steps().iter().rev() {
            if step.is_boundary() {
                continue;
            }

            let (a, b) = match step.tag {
                Tag::M => (seq1[step.row - 1].into(), seq2[step.col - 1].into()),
                Tag::Ix => (seq1[step.row - 1].into(), GAP),
                Tag::Iy => (GAP, seq2[step.col - 1].into()),
            };
            alignment.seq1.push(a);
            alignment.seq2.push(b);
        }
        alignment
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// The aligned parts of both sequences without gaps.
    pub fn ungapped(&self) -> (String, String) {
        let strip = |row: &str| -> String { row.chars().filter(|x| *x != GAP).collect() };
        (strip(&self.seq1), strip(&self.seq2))
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        let (mut ingap1, mut ingap2) = (false, false);

        for (a, b) in self.seq1.chars().zip(self.seq2.chars()) {
            summary.columns += 1;

            let (gap1, gap2) = (a == GAP, b == GAP);
            if gap1 || gap2 {
                summary.gaps += 1;
            } else if a == b {
                summary.matches += 1;
            } else {
                summary.mismatches += 1;
            }

            summary.gap_runs += (gap1 && !ingap1) as usize + (gap2 && !ingap2) as usize;
            (ingap1, ingap2) = (gap1, gap2);
        }
        summary
    }
}
