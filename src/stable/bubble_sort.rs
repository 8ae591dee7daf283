use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

/// Sorts the slice with bubble sort.
///
/// Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with bubble sort using a comparator function.
///
/// If `compare` does not implement a total order the resulting order is unspecified, but all
/// original elements remain in `v`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything behind the last swap of a pass is in its final position, so the next pass can
    // stop there instead of at `len - 1`.
    let mut unsorted_len = v.len();

    while unsorted_len > 1 {
        let mut last_swap = 0;

        for i in 1..unsorted_len {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }

        unsorted_len = last_swap;
    }
}
