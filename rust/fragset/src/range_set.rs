//! An owning, ordered collection of disjoint, non-adjacent ranges.

use std::{fmt, iter::FusedIterator};

use fragset_common::{Result, error::Error, verify_arg};
use itertools::Itertools;
use num_traits::Zero;

use crate::{
    numeric::{FragmentPosition, FragmentSize},
    range::Range,
};

/// A sorted collection of ranges with a strict gap between any two neighbors.
///
/// `RangeSet` tracks which parts of a position domain are present. Inserting a
/// fragment coalesces it with any tracked range it touches exactly; removing a
/// fragment splits the single range that contains it. Inserting a fragment that
/// overlaps a tracked range is rejected, as is removing a fragment that is not
/// fully inside one tracked range.
///
/// Invariants, upheld after every public operation:
/// - Ranges are sorted by `start`, strictly ascending.
/// - For every consecutive pair `(a, b)`: `a.end() < b.start()`. Touching ranges
///   are always merged, so they never coexist.
/// - Every range has a strictly positive size.
///
/// Failed operations leave the set untouched.
///
/// Storage is a `Vec<Range<P, S>>`; merges and splits replace whole elements.
///
/// Complexity overview:
/// - `add_fragment` / `remove_fragment`: O(log n) search + O(n) element shift
/// - `contains_position` / `find_containing`: O(log n)
/// - Enumeration: O(n)
///
/// # Examples
///
/// ```
/// use fragset::{Range, RangeSet};
///
/// let mut set = RangeSet::<u64>::new();
/// set.add_fragment(Range::new(0, 10).unwrap()).unwrap();
/// set.add_fragment(Range::new(20, 10).unwrap()).unwrap();
/// set.add_fragment(Range::new(10, 10).unwrap()).unwrap();
/// assert_eq!(set.len(), 1);
///
/// set.remove_fragment(Range::new(10, 10).unwrap()).unwrap();
/// assert_eq!(set.to_string(), "{[0, 10), [20, 30)}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<P, S = P> {
    fragments: Vec<Range<P, S>>,
}

impl<P, S> RangeSet<P, S> {
    /// Creates an empty set.
    pub fn new() -> Self {
        RangeSet {
            fragments: Vec::new(),
        }
    }

    /// Creates an empty set with room for `capacity` ranges.
    pub fn with_capacity(capacity: usize) -> Self {
        RangeSet {
            fragments: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the set tracks no ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the number of tracked ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns an iterator over the tracked ranges in ascending order.
    ///
    /// Every call starts a fresh traversal. The iterator borrows the set, so
    /// the set cannot be mutated while it is alive.
    pub fn fragments(&self) -> Fragments<'_, P, S> {
        Fragments {
            inner: self.fragments.iter(),
        }
    }

    /// Returns the tracked ranges as a slice, in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[Range<P, S>] {
        &self.fragments
    }

    #[inline]
    pub fn first(&self) -> Option<&Range<P, S>> {
        self.fragments.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Range<P, S>> {
        self.fragments.last()
    }

    /// Drops every tracked range.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

impl<P, S> RangeSet<P, S>
where
    S: FragmentSize,
    P: FragmentPosition<S>,
{
    /// Creates a set holding the single range `[start, start + size)`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidRangeSize` if `size` is not strictly positive.
    pub fn from_range(start: P, size: S) -> Result<Self> {
        Ok(Range::new(start, size)?.into())
    }

    /// Creates a set from ranges that are already sorted and separated by gaps.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidArgument` if two consecutive ranges are out of
    /// order, overlap or touch.
    pub fn try_from_fragments<I>(fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Range<P, S>>,
    {
        let fragments = fragments.into_iter().collect::<Vec<_>>();
        for (a, b) in fragments.iter().tuple_windows() {
            verify_arg!(fragments, a.end() < b.start(), "{a} is followed by {b}");
        }
        Ok(RangeSet { fragments })
    }

    /// Inserts `fragment`, merging it with the tracked ranges it touches.
    ///
    /// Depending on its neighbors, the fragment is
    /// - merged with both the preceding and the following range when it fills
    ///   the gap between them exactly,
    /// - merged into the preceding range when it starts at that range's end,
    /// - merged into the following range when it ends at that range's start,
    /// - inserted as a standalone range otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::OverlappingInsert` if `fragment` shares any position
    /// with a tracked range, and `ErrorKind::RangeOverflow` if the merged range
    /// would be too large for the size type. The set is left unchanged.
    pub fn add_fragment(&mut self, fragment: Range<P, S>) -> Result<()> {
        // `idx` is the first range starting at or after the fragment; the gap
        // that must hold the fragment lies between `idx - 1` and `idx`.
        let idx = self
            .fragments
            .partition_point(|r| r.start() < fragment.start());
        let prev = idx.checked_sub(1).map(|i| self.fragments[i]);
        let next = self.fragments.get(idx).copied();

        let conflict = prev
            .filter(|p| p.end() > fragment.start())
            .or_else(|| next.filter(|n| n.start() < fragment.end()));
        if let Some(conflict) = conflict {
            log::debug!("add_fragment {fragment}: overlaps {conflict}");
            return Err(Error::overlapping_insert(
                fragment.to_string(),
                conflict.to_string(),
            ));
        }

        match (prev, next) {
            (Some(p), Some(n))
                if p.end() == fragment.start() && fragment.end() == n.start() =>
            {
                let merged = Self::merge(
                    p.start(),
                    n.end(),
                    [p.size(), fragment.size(), n.size()],
                )?;
                log::trace!("add_fragment {fragment}: joined {p} and {n} into {merged}");
                self.fragments[idx - 1] = merged;
                self.fragments.remove(idx);
            }
            (Some(p), _) if p.end() == fragment.start() => {
                let merged = Self::merge(
                    p.start(),
                    fragment.end(),
                    [p.size(), fragment.size()],
                )?;
                log::trace!("add_fragment {fragment}: extended {p} to {merged}");
                self.fragments[idx - 1] = merged;
            }
            (_, Some(n)) if fragment.end() == n.start() => {
                let merged = Self::merge(
                    fragment.start(),
                    n.end(),
                    [fragment.size(), n.size()],
                )?;
                log::trace!("add_fragment {fragment}: extended {n} to {merged}");
                self.fragments[idx] = merged;
            }
            _ => {
                log::trace!("add_fragment {fragment}: inserted at {idx}");
                self.fragments.insert(idx, fragment);
            }
        }

        debug_assert!(self.validate().is_ok());
        Ok(())
    }

    /// Removes `fragment` from the single tracked range that contains it.
    ///
    /// The owning range is replaced by its non-empty remainders: the part
    /// before `fragment.start()` and the part from `fragment.end()` on. Removing
    /// a whole tracked range leaves no remainder.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::NotASubrange` if no single tracked range fully
    /// contains `fragment`, including fragments that span several ranges. The
    /// set is left unchanged.
    pub fn remove_fragment(&mut self, fragment: Range<P, S>) -> Result<()> {
        let Some(idx) = self.index_of_containing(&fragment) else {
            log::debug!("remove_fragment {fragment}: no tracked range contains it");
            return Err(Error::not_a_subrange(fragment.to_string()));
        };

        let owner = self.fragments[idx];
        let left = (owner.start() < fragment.start())
            .then(|| Range::spanning(owner.start(), fragment.start()));
        let right =
            (fragment.end() < owner.end()).then(|| Range::spanning(fragment.end(), owner.end()));
        log::trace!(
            "remove_fragment {fragment}: split {owner} into {} remainder(s)",
            left.is_some() as usize + right.is_some() as usize
        );
        self.fragments
            .splice(idx..idx + 1, left.into_iter().chain(right));

        debug_assert!(self.validate().is_ok());
        Ok(())
    }

    /// Returns the tracked range that fully contains `fragment`, if any.
    pub fn find_containing(&self, fragment: &Range<P, S>) -> Option<&Range<P, S>> {
        self.index_of_containing(fragment)
            .map(|idx| &self.fragments[idx])
    }

    /// Checks whether `pos` lies inside any tracked range.
    pub fn contains_position(&self, pos: P) -> bool {
        let idx = self.fragments.partition_point(|r| r.start() <= pos);
        idx.checked_sub(1)
            .is_some_and(|i| self.fragments[i].contains_position(pos))
    }

    /// Returns the smallest range covering every tracked range, or `None` if
    /// the set is empty.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::RangeOverflow` if the covering range is too large
    /// for the size type.
    pub fn bounds(&self) -> Result<Option<Range<P, S>>> {
        let (Some(first), Some(last)) = (self.fragments.first(), self.fragments.last()) else {
            return Ok(None);
        };
        Range::from_bounds(first.start(), last.end()).map(Some)
    }

    /// Returns the sum of the sizes of all tracked ranges, or `None` if the
    /// sum does not fit the size type.
    pub fn total_size(&self) -> Option<S>
    where
        S: Zero,
    {
        self.fragments
            .iter()
            .try_fold(S::zero(), |acc, r| acc.checked_sum(r.size()))
    }

    /// Verifies the ordering and separation invariants of the set, and that
    /// every range has a positive size with `start + size == end`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidArgument` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        for r in &self.fragments {
            verify_arg!(fragments, r.is_consistent(), "{r} has size {:?}", r.size());
        }
        for (a, b) in self.fragments.iter().tuple_windows() {
            verify_arg!(fragments, a.end() < b.start(), "{a} is followed by {b}");
        }
        Ok(())
    }

    /// Builds the merged range `[start, end)` whose size is the sum of the
    /// sizes of its touching parts.
    fn merge<const N: usize>(start: P, end: P, sizes: [S; N]) -> Result<Range<P, S>> {
        let mut sizes = sizes.into_iter();
        let size = sizes
            .next()
            .and_then(|first| sizes.try_fold(first, |acc, size| acc.checked_sum(size)));
        match size {
            Some(size) => Ok(Range::from_parts(start, size, end)),
            None => {
                log::debug!("merge [{start:?}, {end:?}): size overflow");
                Err(Error::range_overflow(format!("[{start:?}, {end:?})")))
            }
        }
    }

    fn index_of_containing(&self, fragment: &Range<P, S>) -> Option<usize> {
        let idx = self
            .fragments
            .partition_point(|r| r.start() <= fragment.start())
            .checked_sub(1)?;
        self.fragments[idx].contains(fragment).then_some(idx)
    }
}

impl<P, S> Default for RangeSet<P, S> {
    fn default() -> Self {
        RangeSet::new()
    }
}

impl<P, S> From<Range<P, S>> for RangeSet<P, S> {
    fn from(range: Range<P, S>) -> Self {
        RangeSet {
            fragments: vec![range],
        }
    }
}

impl<'a, P, S> IntoIterator for &'a RangeSet<P, S> {
    type Item = &'a Range<P, S>;
    type IntoIter = Fragments<'a, P, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments()
    }
}

impl<P, S> IntoIterator for RangeSet<P, S> {
    type Item = Range<P, S>;
    type IntoIter = std::vec::IntoIter<Range<P, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<P: fmt::Debug, S> fmt::Display for RangeSet<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.fragments.iter().format(", "))
    }
}

/// Ascending iterator over the ranges of a [`RangeSet`].
///
/// Created by [`RangeSet::fragments`].
#[derive(Debug, Clone)]
pub struct Fragments<'a, P, S = P> {
    inner: std::slice::Iter<'a, Range<P, S>>,
}

impl<'a, P, S> Iterator for Fragments<'a, P, S> {
    type Item = &'a Range<P, S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<P, S> DoubleEndedIterator for Fragments<'_, P, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<P, S> ExactSizeIterator for Fragments<'_, P, S> {}

impl<P, S> FusedIterator for Fragments<'_, P, S> {}
