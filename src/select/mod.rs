//! Order statistics.

// Iterative Lomuto partition selection, expected linear time.
pub mod quickselect;
