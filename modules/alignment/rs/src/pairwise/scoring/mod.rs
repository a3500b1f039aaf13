pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

/// Complete scoring scheme: substitution scores between the two alphabets plus affine gap
/// penalties for both sequences.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<
        Score = <Self as Scheme>::Score,
        Seq1Symbol = <Self as Scheme>::Seq1Symbol,
        Seq2Symbol = <Self as Scheme>::Seq2Symbol,
    >
{
    type Score: Score;
    type Seq1Symbol;
    type Seq2Symbol;
}

/// The scoring model read from parameter files: explicit substitution table + dual affine gaps.
pub type Model<S, Seq1Symbol, Seq2Symbol> =
    Delegate<symbols::Table<S, Seq1Symbol, Seq2Symbol>, gaps::DualAffine<S>>;

pub fn compose<ScoreType, Syms, Gaps>(symbols: Syms, gaps: Gaps) -> Delegate<Syms, Gaps>
where
    ScoreType: Score,
    Syms: symbols::Scorer<Score = ScoreType>,
    Gaps: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
