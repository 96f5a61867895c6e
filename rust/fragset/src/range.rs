//! A single tracked interval.

use std::fmt;

use fragset_common::{Result, error::Error};

use crate::numeric::{FragmentPosition, FragmentSize};

/// An immutable half-open interval `[start, start + size)` with a strictly
/// positive size.
///
/// The end position is derived once at construction and stored alongside the
/// start and size. A `Range` is never modified in place: merging and splitting
/// always produce new values.
///
/// `P` is the position type and `S` the size type; for primitive integers both
/// are usually the same type, which is the default.
///
/// # Examples
///
/// ```
/// use fragset::Range;
///
/// let r = Range::new(10u64, 5).unwrap();
/// assert_eq!(r.start(), 10);
/// assert_eq!(r.end(), 15);
/// assert!(Range::new(10u64, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<P, S = P> {
    start: P,
    size: S,
    end: P,
}

impl<P, S> Range<P, S>
where
    S: FragmentSize,
    P: FragmentPosition<S>,
{
    /// Creates a range starting at `start` and spanning `size` positions.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidRangeSize` if `size` is not strictly positive,
    /// or if the end position `start + size` is not representable.
    pub fn new(start: P, size: S) -> Result<Self> {
        match start.checked_advance(size) {
            Some(end) if end > start => Ok(Range { start, size, end }),
            _ => Err(Error::invalid_range_size(format!(
                "[{start:?}, {start:?} + {size:?})"
            ))),
        }
    }

    /// Creates the range `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidRangeSize` if `end <= start`, and
    /// `ErrorKind::RangeOverflow` if `end - start` does not fit the size type.
    pub fn from_bounds(start: P, end: P) -> Result<Self> {
        if end <= start {
            return Err(Error::invalid_range_size(format!("[{start:?}, {end:?})")));
        }
        let size = end
            .checked_distance(start)
            .ok_or_else(|| Error::range_overflow(format!("[{start:?}, {end:?})")))?;
        Ok(Range { start, size, end })
    }

    /// Builds `[start, end)` for bounds already known to be ordered, with a
    /// size no larger than that of an existing range.
    #[inline]
    pub(crate) fn spanning(start: P, end: P) -> Self {
        debug_assert!(start < end);
        Range {
            start,
            size: end - start,
            end,
        }
    }

    /// Builds a range from parts already known to be consistent.
    #[inline]
    pub(crate) fn from_parts(start: P, size: S, end: P) -> Self {
        debug_assert!(start < end);
        debug_assert!(start.checked_advance(size) == Some(end));
        Range { start, size, end }
    }

    /// Checks that `start + size == end` holds without overflow and that the
    /// range is not empty.
    #[inline]
    pub(crate) fn is_consistent(&self) -> bool {
        self.start < self.end && self.start.checked_advance(self.size) == Some(self.end)
    }

    #[inline]
    pub fn start(&self) -> P {
        self.start
    }

    #[inline]
    pub fn size(&self) -> S {
        self.size
    }

    /// Exclusive end position, `start + size`.
    #[inline]
    pub fn end(&self) -> P {
        self.end
    }

    #[inline]
    pub fn contains_position(&self, pos: P) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Checks whether `other` lies entirely within this range.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Checks whether the two ranges share at least one position.
    ///
    /// Touching ranges (`a.end == b.start`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks whether one range ends exactly where the other begins.
    #[inline]
    pub fn touches(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Converts to a standard library half-open range.
    #[inline]
    pub fn to_std(&self) -> std::ops::Range<P> {
        self.start..self.end
    }
}

impl<P, S> TryFrom<std::ops::Range<P>> for Range<P, S>
where
    S: FragmentSize,
    P: FragmentPosition<S>,
{
    type Error = Error;

    fn try_from(range: std::ops::Range<P>) -> Result<Self> {
        Range::from_bounds(range.start, range.end)
    }
}

impl<P: fmt::Debug, S> fmt::Display for Range<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?})", self.start, self.end)
    }
}
