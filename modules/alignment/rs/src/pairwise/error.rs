use std::fmt::Debug;

use derive_more::{Display, Error};

/// Failures of a single alignment run. Each of them aborts the run: no partial results are kept.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum Error {
    /// The substitution score for a pair of symbols was never registered. `row` and `col` are the
    /// 1-based positions of the symbols in the first and the second sequence, 0 if the pair was
    /// queried outside of an alignment.
    #[display("No substitution score registered for the symbol pair ({a}, {b}) at positions {row} and {col}")]
    Lookup {
        a: String,
        b: String,
        row: usize,
        col: usize,
    },
    /// Traceback enumerated more co-optimal paths than allowed.
    #[display("Traceback produced more than {limit} co-optimal paths")]
    TooManyPaths { limit: usize },
    /// A single traceback path grew longer than allowed.
    #[display("Traceback path exceeded the depth limit of {limit} steps")]
    TooDeep { limit: usize },
}

impl Error {
    pub fn lookup<A: Debug, B: Debug>(a: &A, b: &B) -> Self {
        Error::Lookup {
            a: format!("{a:?}"),
            b: format!("{b:?}"),
            row: 0,
            col: 0,
        }
    }

    /// Attach the sequence positions to a lookup error. Other errors are returned unchanged.
    pub fn at(self, row: usize, col: usize) -> Self {
        match self {
            Error::Lookup { a, b, .. } => Error::Lookup { a, b, row, col },
            other => other,
        }
    }

    /// Resource-limit errors are raised by the traceback caps rather than by the input.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, Error::TooManyPaths { .. } | Error::TooDeep { .. })
    }
}
