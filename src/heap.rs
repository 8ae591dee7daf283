//! Implicit binary max-heap layout shared by the heapsort variants.
//!
//! The slice itself is the heap, no separate structure is built.

#[inline(always)]
pub(crate) const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline(always)]
pub(crate) const fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline(always)]
pub(crate) const fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Heapsort skeleton. `sift_down(heap, node, is_less)` must restore the max-heap property for
/// the subtree rooted at `node`, given that both child subtrees already satisfy it.
pub(crate) fn heapsort<T, F>(
    v: &mut [T],
    is_less: &mut F,
    sift_down: fn(&mut [T], usize, &mut F),
) where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build the heap in linear time, starting from the last parent.
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}
