use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use ahash::AHashMap;

use crate::pairwise::scoring::Score;
use crate::pairwise::Error;

/// Substitution score for aligning a symbol of the first sequence against a symbol of the second.
/// The two alphabets are independent.
pub trait Scorer {
    type Score: Score;
    type Seq1Symbol;
    type Seq2Symbol;

    fn score(&self, s1: &Self::Seq1Symbol, s2: &Self::Seq2Symbol) -> Result<Self::Score, Error>;
}

/// Explicit substitution table. Pairs that were never inserted are lookup errors, there is no
/// default score.
#[derive(Clone, Debug)]
pub struct Table<S: Score, A, B> {
    scores: AHashMap<(A, B), S>,
}

impl<S: Score, A, B> Default for Table<S, A, B> {
    fn default() -> Self {
        Self {
            scores: AHashMap::new(),
        }
    }
}

impl<S: Score, A: Copy + Eq + Hash, B: Copy + Eq + Hash> Table<S, A, B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) the score of a pair. Returns the previous score, if any.
    pub fn insert(&mut self, a: A, b: B, score: S) -> Option<S> {
        self.scores.insert((a, b), score)
    }

    pub fn get(&self, a: &A, b: &B) -> Option<S> {
        self.scores.get(&(*a, *b)).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Score, A: Copy + Eq + Hash, B: Copy + Eq + Hash> FromIterator<(A, B, S)>
    for Table<S, A, B>
{
    fn from_iter<T: IntoIterator<Item = (A, B, S)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (a, b, score) in iter {
            table.insert(a, b, score);
        }
        table
    }
}

impl<S, A, B> Scorer for Table<S, A, B>
where
    S: Score,
    A: Copy + Eq + Hash + Debug,
    B: Copy + Eq + Hash + Debug,
{
    type Score = S;
    type Seq1Symbol = A;
    type Seq2Symbol = B;

    #[inline(always)]
    fn score(&self, a: &A, b: &B) -> Result<S, Error> {
        self.get(a, b).ok_or_else(|| Error::lookup(a, b))
    }
}

/// Match/mismatch scoring for sequences over the same alphabet.
#[derive(Clone, Debug)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol: PartialEq> Scorer for Equality<S, Symbol> {
    type Score = S;
    type Seq1Symbol = Symbol;
    type Seq2Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Result<S, Error> {
        Ok(if a == b { self.equal } else { self.different })
    }
}
