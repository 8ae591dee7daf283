//! Precondition failures reported by the sorts and selection routines.
//!
//! Every check runs before the first write to the caller's slice, so an `Err` always means the
//! input is untouched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for argument validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Selection was asked for an order statistic of an empty slice.
    EmptyRange,

    /// The inclusive upper bound of a selection lies past the end of the slice.
    RightOutOfBounds {
        /// Requested upper bound.
        right: usize,
        /// Length of the slice.
        len: usize,
    },

    /// The selection range is inverted.
    LeftAfterRight { left: usize, right: usize },

    /// The requested order statistic lies outside the selection range.
    IndexOutsideRange { k: usize, left: usize, right: usize },

    /// The auxiliary buffer of a copying merge sort must match the input length.
    BufferLengthMismatch {
        /// Length of the slice to sort.
        len: usize,
        /// Length of the supplied buffer.
        buffer_len: usize,
    },

    /// A gap sequence needs at least one gap.
    EmptyGapSequence,

    /// Gaps must be strictly positive.
    ZeroGap { index: usize },

    /// Gaps must strictly decrease.
    GapsNotDecreasing { index: usize },

    /// The final gap must be 1, otherwise the result is not guaranteed to be sorted.
    GapSequenceMissingFinalOne { last: usize },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::EmptyRange => write!(f, "Cannot select from an empty slice"),
            SortError::RightOutOfBounds { right, len } => {
                write!(f, "Right bound {right} is out of bounds for length {len}")
            }
            SortError::LeftAfterRight { left, right } => {
                write!(f, "Left bound {left} is greater than right bound {right}")
            }
            SortError::IndexOutsideRange { k, left, right } => {
                write!(f, "Index {k} is outside the selection range [{left}, {right}]")
            }
            SortError::BufferLengthMismatch { len, buffer_len } => write!(
                f,
                "Buffer length mismatch: input has {len} elements, buffer has {buffer_len}"
            ),
            SortError::EmptyGapSequence => write!(f, "Gap sequence is empty"),
            SortError::ZeroGap { index } => write!(f, "Gap at position {index} is zero"),
            SortError::GapsNotDecreasing { index } => {
                write!(f, "Gap at position {index} is not smaller than its predecessor")
            }
            SortError::GapSequenceMissingFinalOne { last } => {
                write!(f, "Gap sequence must end in 1, but ends in {last}")
            }
        }
    }
}

impl Error for SortError {}
