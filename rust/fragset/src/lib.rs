//! Tracking of disjoint, non-adjacent ranges over a generic position domain.
//!
//! This crate answers the question "which parts of a resource are already
//! present": received byte ranges of a stream, extracted regions of an archive,
//! allocated spans of a file. It offers:
//!
//! - **Ranges**: immutable, validated half-open intervals described by a start
//!   position and a strictly positive size
//! - **Range sets**: an ordered collection that coalesces touching ranges on
//!   insert and splits the owning range on removal
//! - **Generic positions**: any ordered numeric-like type works, as long as
//!   `position + size` and `position - position` are defined
//!
//! # Key Types
//!
//! - [`Range`] - A single tracked interval `[start, start + size)`
//! - [`RangeSet`] - A sorted list of ranges with a strict gap between neighbors
//! - [`FragmentPosition`], [`FragmentSize`] - The numeric capabilities required
//!   of the position and size types

pub mod numeric;
pub mod range;
pub mod range_set;


pub use fragset_common::{Result, error::Error, error::ErrorKind};
pub use numeric::{FragmentPosition, FragmentSize};
pub use range::Range;
pub use range_set::{Fragments, RangeSet};
