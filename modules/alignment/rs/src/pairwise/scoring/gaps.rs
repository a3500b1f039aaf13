use derive_more::Constructor;

use crate::pairwise::scoring::Score;

// Gap penalties are positive magnitudes, the recurrence subtracts them.
//
// A gap "in the first sequence" is a run of columns where only the second sequence advances
// (the Iy matrix), and vice versa for the second sequence (the Ix matrix).
pub trait Scorer {
    type Score: Score;

    /// `dx`: opening a gap in the first sequence.
    fn seq1_gap_open(&self) -> Self::Score;
    /// `ex`: extending a gap in the first sequence.
    fn seq1_gap_extend(&self) -> Self::Score;

    /// `dy`: opening a gap in the second sequence.
    fn seq2_gap_open(&self) -> Self::Score;
    /// `ey`: extending a gap in the second sequence.
    fn seq2_gap_extend(&self) -> Self::Score;
}

pub trait Symmetric {
    type GapScore: Score;

    fn gap_open(&self) -> Self::GapScore;
    fn gap_extend(&self) -> Self::GapScore;
}

impl<T: Symmetric> Scorer for T {
    type Score = <Self as Symmetric>::GapScore;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }
}

/// Same affine penalties for gaps in either sequence.
#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Symmetric for Affine<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.extend
    }
}

/// Independent affine penalties for gaps in the first (`dx`, `ex`) and the second (`dy`, `ey`)
/// sequence, in the order they appear in parameter files.
#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor)]
pub struct DualAffine<S: Score> {
    pub dx: S,
    pub ex: S,
    pub dy: S,
    pub ey: S,
}

impl<S: Score> Scorer for DualAffine<S> {
    type Score = S;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.dx
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.ex
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.dy
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.ey
    }
}
