use crate::pairwise::scoring::{gaps, symbols};
use crate::pairwise::Error;

/// Glues independent symbol and gap scorers into a single [super::Scheme].
#[derive(Clone, Debug)]
pub struct Delegate<Syms, Gaps>
where
    Syms: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Syms::Score>,
{
    pub symbols: Syms,
    pub gaps: Gaps,
}

impl<Syms, Gaps> Delegate<Syms, Gaps>
where
    Syms: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Syms::Score>,
{
    pub fn new(symbols: Syms, gaps: Gaps) -> Self {
        Delegate { symbols, gaps }
    }
}

impl<Syms, Gaps> gaps::Scorer for Delegate<Syms, Gaps>
where
    Syms: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Syms::Score>,
{
    type Score = Syms::Score;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.gaps.seq1_gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.gaps.seq1_gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.gaps.seq2_gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.gaps.seq2_gap_extend()
    }
}

impl<Syms, Gaps> symbols::Scorer for Delegate<Syms, Gaps>
where
    Syms: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Syms::Score>,
{
    type Score = Syms::Score;
    type Seq1Symbol = Syms::Seq1Symbol;
    type Seq2Symbol = Syms::Seq2Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Seq1Symbol, b: &Self::Seq2Symbol) -> Result<Self::Score, Error> {
        self.symbols.score(a, b)
    }
}

impl<Syms, Gaps> super::Scheme for Delegate<Syms, Gaps>
where
    Syms: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Syms::Score>,
{
    type Score = Syms::Score;
    type Seq1Symbol = Syms::Seq1Symbol;
    type Seq2Symbol = Syms::Seq2Symbol;
}
