use std::cmp::Ordering;

use crate::heap::{self, left_child, parent, right_child};

sort_impl!("heapsort_floyd_unstable");

/// Sorts the slice with heapsort, using Floyd's sift-down.
///
/// The sifted value usually belongs near the bottom of the heap, so instead of comparing it at
/// every level on the way down, the path of larger children is followed to a leaf first and the
/// insertion point is searched for on the way back up. Roughly half the comparisons of
/// [`heapsort_basic`](super::heapsort_basic), same *O*(*n* \* log(*n*)) bound.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heap::heapsort(v, &mut |a: &T, b: &T| a.lt(b), sift_down);
}

/// Sorts the slice with Floyd heapsort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap::heapsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less, sift_down);
}

// --- IMPL ---

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sift_down<T, F>(v: &mut [T], root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut node = leaf_search(v, root, is_less);

    // Climb to the first ancestor not smaller than the root value. The `node > root` check
    // keeps an inconsistent comparator from walking out of the subtree.
    while node > root && is_less(&v[node], &v[root]) {
        node = parent(node);
    }

    // Rotate the root value down into `node`, moving every element on the path up one level.
    while node > root {
        v.swap(root, node);
        node = parent(node);
    }
}

/// Follows the larger child from `node` down to a leaf.
fn leaf_search<T, F>(v: &[T], mut node: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    while right_child(node) < len {
        let left = left_child(node);
        let right = right_child(node);
        node = if is_less(&v[left], &v[right]) { right } else { left };
    }

    // A last parent may have a single child.
    if left_child(node) < len {
        node = left_child(node);
    }

    node
}
