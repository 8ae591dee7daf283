//! Sorts that preserve the relative order of elements comparing equal.

// Adjacent exchange with a shrinking unsorted suffix.
pub mod bubble_sort;

// Shift based insertion, adaptive on presorted input.
pub mod insertion_sort;

// Minimum search plus a shift instead of a swap, which keeps it stable.
pub mod selection_sort;

// Top-down merge sort merging by element shifts, no auxiliary memory.
pub mod merge_sort_shift;

// Bottom-up and top-down merge sorts that merge through a caller supplied buffer.
pub mod merge_sort_copy;
