//! Sorts that may reorder elements comparing equal.

// Selection sort variant that places every copy of a value per pass.
pub mod bingo_sort;

// Bubble sort over a gap shrinking by a factor of 1.3.
pub mod comb_sort;

// Gapped insertion passes, Ciura gaps by default.
pub mod shell_sort;

// Heapsort with the textbook top-down sift.
pub mod heapsort_basic;

// Heapsort with Floyd's leaf search sift.
pub mod heapsort_floyd;

// Recursive quicksort with the Lomuto partition scheme.
pub mod quicksort_lomuto;
