//! Runtime selectable list of every sort in the crate.

use std::cmp::Ordering;
use std::fmt;

use crate::stable::{bubble_sort, insertion_sort, merge_sort_copy, merge_sort_shift, selection_sort};
use crate::unstable::{
    bingo_sort, comb_sort, heapsort_basic, heapsort_floyd, quicksort_lomuto, shell_sort,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    BingoSort,
    CombSort,
    ShellSort,
    HeapsortBasic,
    HeapsortFloyd,
    MergeSortShift,
    MergeSortCopyBottomUp,
    MergeSortCopyTopDown,
    Quicksort,
}

pub const ALL_ALGORITHMS: [Algorithm; 12] = [
    Algorithm::BubbleSort,
    Algorithm::InsertionSort,
    Algorithm::SelectionSort,
    Algorithm::BingoSort,
    Algorithm::CombSort,
    Algorithm::ShellSort,
    Algorithm::HeapsortBasic,
    Algorithm::HeapsortFloyd,
    Algorithm::MergeSortShift,
    Algorithm::MergeSortCopyBottomUp,
    Algorithm::MergeSortCopyTopDown,
    Algorithm::Quicksort,
];

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble_sort",
            Algorithm::InsertionSort => "insertion_sort",
            Algorithm::SelectionSort => "selection_sort",
            Algorithm::BingoSort => "bingo_sort",
            Algorithm::CombSort => "comb_sort",
            Algorithm::ShellSort => "shell_sort",
            Algorithm::HeapsortBasic => "heapsort_basic",
            Algorithm::HeapsortFloyd => "heapsort_floyd",
            Algorithm::MergeSortShift => "merge_sort_shift",
            Algorithm::MergeSortCopyBottomUp => "merge_sort_copy_bottom_up",
            Algorithm::MergeSortCopyTopDown => "merge_sort_copy_top_down",
            Algorithm::Quicksort => "quicksort_lomuto",
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::BubbleSort
                | Algorithm::InsertionSort
                | Algorithm::SelectionSort
                | Algorithm::MergeSortShift
                | Algorithm::MergeSortCopyBottomUp
                | Algorithm::MergeSortCopyTopDown
        )
    }

    /// Whether the algorithm merges through an auxiliary buffer of the input's length.
    pub fn needs_buffer(self) -> bool {
        matches!(
            self,
            Algorithm::MergeSortCopyBottomUp | Algorithm::MergeSortCopyTopDown
        )
    }

    #[inline]
    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord + Clone,
    {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    /// Sorts `v` with this algorithm. The copying merge sorts allocate their buffer here.
    pub fn sort_by<T, F>(self, v: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::BubbleSort => bubble_sort::sort_by(v, compare),
            Algorithm::InsertionSort => insertion_sort::sort_by(v, compare),
            Algorithm::SelectionSort => selection_sort::sort_by(v, compare),
            Algorithm::BingoSort => bingo_sort::sort_by(v, compare),
            Algorithm::CombSort => comb_sort::sort_by(v, compare),
            Algorithm::ShellSort => shell_sort::sort_by(v, compare),
            Algorithm::HeapsortBasic => heapsort_basic::sort_by(v, compare),
            Algorithm::HeapsortFloyd => heapsort_floyd::sort_by(v, compare),
            Algorithm::MergeSortShift => merge_sort_shift::sort_by(v, compare),
            Algorithm::MergeSortCopyBottomUp => {
                let mut buf = v.to_vec();
                merge_sort_copy::bottom_up::merge_sort(v, &mut buf, &mut |a, b| {
                    compare(a, b) == Ordering::Less
                });
            }
            Algorithm::MergeSortCopyTopDown => {
                let mut buf = v.to_vec();
                merge_sort_copy::top_down::merge_sort(v, &mut buf, &mut |a, b| {
                    compare(a, b) == Ordering::Less
                });
            }
            Algorithm::Quicksort => quicksort_lomuto::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
