use std::cmp::Ordering;

use crate::exchange;

sort_impl!("quicksort_lomuto_unstable");

/// Sorts the slice with quicksort using the Lomuto partition scheme.
///
/// The pivot is always the last element of the range, there is no randomization and no
/// median-of-three. *O*(*n* \* log(*n*)) on average, but already sorted, reverse sorted and
/// all equal inputs degrade to *O*(*n*^2).
///
/// The recursion always descends into the shorter side and loops on the longer one, which keeps
/// the stack depth at *O*(log(*n*)) even on the quadratic inputs.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with Lomuto quicksort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Partitions `v` around its last element and returns the final position of that element.
///
/// Afterwards every element left of the returned index compares less than the pivot and every
/// element right of it does not. Returns 0 for an empty slice.
#[inline]
pub fn partition_by<T, F>(v: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

// --- IMPL ---

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Lomuto partition around `v[len - 1]`.
///
/// If `is_less` does not implement a total order the resulting order is unspecified, but the
/// returned index is always in-bounds and all original elements remain in `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    // `v_without_pivot[..num_lt]` holds everything found to be less than the pivot so far.
    let mut num_lt = 0;
    for i in 0..v_without_pivot.len() {
        if is_less(&v_without_pivot[i], pivot) {
            exchange::swap(v_without_pivot, num_lt, i);
            num_lt += 1;
        }
    }

    // Place the pivot between the two partitions.
    exchange::swap(v, num_lt, len - 1);

    num_lt
}
