use std::cmp::Ordering;

use crate::exchange;

sort_impl!("selection_sort_stable");

/// Sorts the slice with selection sort.
///
/// The minimum of the unsorted suffix is shifted into place rather than swapped, which keeps
/// equal elements in order. Always *O*(*n*^2) comparisons.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with selection sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        // Strict comparison picks the first of several equal minima.
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        exchange::rotate_right_1(&mut v[i..=min]);
    }
}
