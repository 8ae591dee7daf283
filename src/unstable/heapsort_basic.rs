use std::cmp::Ordering;

use crate::heap::{self, left_child};

sort_impl!("heapsort_basic_unstable");

/// Sorts the slice with heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Uses the textbook sift-down, comparing each node against both children.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heap::heapsort(v, &mut |a: &T, b: &T| a.lt(b), sift_down);
}

/// Sorts the slice with basic heapsort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap::heapsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less, sift_down);
}

// --- IMPL ---

// This binary heap respects the invariant `parent >= child`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let mut child = left_child(node);
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
