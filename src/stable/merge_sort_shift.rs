use std::cmp::Ordering;

use crate::exchange;

sort_impl!("merge_sort_shift_stable");

/// Sorts the slice with a top-down merge sort that merges in place.
///
/// Instead of merging through a buffer, an element of the right run that belongs in front of
/// the left run is shifted into position. This needs no memory beyond the recursion stack, but
/// every shift moves the rest of the left run by one.
///
/// Stable. *O*(*n* \* log(*n*)) comparisons, *O*(*n*^2) element moves worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with the shifting merge sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], is_less);
    merge_sort(&mut v[mid..], is_less);
    merge_shift(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_shift<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Already in order, nothing to do.
    if mid == 0 || mid >= len || !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    // The left run occupies `v[left..right]`, the right run `v[right..]`.
    let mut left = 0;
    let mut right = mid;

    while left < right && right < len {
        // Only a strictly smaller right element overtakes, equal ones stay behind.
        if is_less(&v[right], &v[left]) {
            exchange::rotate_right_1(&mut v[left..=right]);
            right += 1;
        }
        left += 1;
    }
}
