//! One entry point over the three merge sorts.
//!
//! The variants only differ in how they trade memory for element moves, so callers pick one by
//! what they can spare: [`MergeStrategy::InPlace`] needs nothing, the copying strategies borrow a
//! buffer of the input's length.

use std::cmp::Ordering;

use crate::stable::{merge_sort_copy, merge_sort_shift};
use crate::SortError;

/// How a merge sort obtains space for merging.
#[derive(Debug)]
pub enum MergeStrategy<'a, T> {
    /// Merge by shifting elements inside the input, no auxiliary memory.
    InPlace,

    /// Iterative bottom-up merging through the given buffer.
    BottomUp(&'a mut [T]),

    /// Recursive top-down merging through the given buffer.
    TopDown(&'a mut [T]),
}

impl<T> MergeStrategy<'_, T> {
    pub fn name(&self) -> &'static str {
        match self {
            MergeStrategy::InPlace => "in_place",
            MergeStrategy::BottomUp(_) => "bottom_up",
            MergeStrategy::TopDown(_) => "top_down",
        }
    }

    pub fn needs_buffer(&self) -> bool {
        !matches!(self, MergeStrategy::InPlace)
    }
}

/// Stable merge sort of `v` with the chosen strategy.
///
/// # Errors
///
/// Returns [`SortError::BufferLengthMismatch`] if a strategy's buffer does not match `v.len()`.
#[inline]
pub fn sort<T>(v: &mut [T], strategy: MergeStrategy<'_, T>) -> Result<(), SortError>
where
    T: Ord + Clone,
{
    sort_by(v, strategy, |a, b| a.cmp(b))
}

/// Stable merge sort of `v` with the chosen strategy and a comparator function.
///
/// # Errors
///
/// See [`sort`].
pub fn sort_by<T, F>(
    v: &mut [T],
    strategy: MergeStrategy<'_, T>,
    compare: F,
) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match strategy {
        MergeStrategy::InPlace => {
            merge_sort_shift::sort_by(v, compare);
            Ok(())
        }
        MergeStrategy::BottomUp(buf) => merge_sort_copy::bottom_up::sort_by(v, buf, compare),
        MergeStrategy::TopDown(buf) => merge_sort_copy::top_down::sort_by(v, buf, compare),
    }
}
