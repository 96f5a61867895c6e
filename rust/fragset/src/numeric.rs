//! Numeric capabilities of the position and size types.

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use num_traits::{CheckedAdd, CheckedSub};

/// The size (length) of a range.
///
/// Sizes must be totally ordered and closed under addition, so that the sizes
/// of touching ranges can be summed when they are merged. Sums that do not fit
/// the type are reported through [`checked_sum`](Self::checked_sum) rather than
/// wrapping or panicking.
pub trait FragmentSize: Ord + Copy + Debug + Add<Output = Self> {
    /// Returns `self + rhs`, or `None` if the sum is not representable.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

impl<S> FragmentSize for S
where
    S: Ord + Copy + Debug + CheckedAdd,
{
    #[inline]
    fn checked_sum(self, rhs: S) -> Option<S> {
        self.checked_add(&rhs)
    }
}

/// A position within the tracked domain.
///
/// Positions must be totally ordered, advance by a size (`P + S -> P`), and
/// yield a size when subtracted (`P - P -> S`). Both operations have checked
/// forms that return `None` when the result is not representable.
///
/// Every primitive integer implements this with `S = P`. A byte offset newtype
/// over a distinct byte length type implements it directly.
pub trait FragmentPosition<S: FragmentSize>:
    Ord + Copy + Debug + Add<S, Output = Self> + Sub<Self, Output = S>
{
    /// Returns `self + size`, or `None` if the position is not representable.
    fn checked_advance(self, size: S) -> Option<Self>;

    /// Returns `self - origin`, or `None` if the size is not representable.
    fn checked_distance(self, origin: Self) -> Option<S>;
}

impl<P> FragmentPosition<P> for P
where
    P: Ord + Copy + Debug + CheckedAdd + CheckedSub,
{
    #[inline]
    fn checked_advance(self, size: P) -> Option<P> {
        self.checked_add(&size)
    }

    #[inline]
    fn checked_distance(self, origin: P) -> Option<P> {
        self.checked_sub(&origin)
    }
}
