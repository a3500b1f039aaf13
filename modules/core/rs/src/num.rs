use std::fmt::{Debug, Display};

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Display + Default + Send + Sync {}

impl<T: ::num::Float + Debug + Display + Default + Send + Sync> Float for T {}

/// Absolute tolerance used for every score comparison in the alignment.
pub const TOLERANCE: f64 = 1e-6;

/// Alignment scores are floats compared with an absolute tolerance, so that ties created by
/// rounding (e.g. `0.1 + 0.2` vs `0.3`) are still recognised as ties.
pub trait Score: Float {
    /// The absolute tolerance converted into the score type.
    #[inline(always)]
    fn tolerance() -> Self {
        <Self as ::num::NumCast>::from(TOLERANCE).unwrap_or_else(<Self as ::num::Float>::epsilon)
    }

    /// Two scores are equal if they are identical (this includes equal infinities) or if their
    /// absolute difference is below the tolerance.
    #[inline(always)]
    fn fuzzy_eq(self, other: Self) -> bool {
        self == other || (self - other).abs() < Self::tolerance()
    }

    /// `self` is zero or negative up to the tolerance.
    #[inline(always)]
    fn is_nonpositive(self) -> bool {
        self < Self::zero() || self.fuzzy_eq(Self::zero())
    }
}

impl<T: Float> Score for T {}
