use std::cmp::Ordering;

use crate::exchange;

sort_impl!("insertion_sort_stable");

/// Sorts the slice with insertion sort.
///
/// Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort_shift_left(v, 1, &mut |a, b| a.lt(b));
}

/// Sorts the slice with insertion sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_shift_left(v, 1, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

/// Sort `v` assuming `v[..offset]` is already sorted.
fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // A zero offset would leave `v[0]` unvisited, anything past `len` has nothing to insert.
    if offset == 0 || offset >= len {
        return;
    }

    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` left past every element greater than it. `v[..len - 1]` must
/// be sorted.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;

    let mut hole = last;
    while hole > 0 && is_less(&v[last], &v[hole - 1]) {
        hole -= 1;
    }

    exchange::rotate_right_1(&mut v[hole..]);
}
