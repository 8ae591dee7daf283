use std::cmp::Ordering;

sort_impl!("comb_sort_unstable");

/// Sorts the slice with comb sort.
///
/// Sub-quadratic on average, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    comb_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with comb sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    comb_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn comb_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    let mut unit_gap_passes = 0;

    loop {
        // Shrink factor 1.3.
        gap = (gap * 10 / 13).max(1);

        let mut swapped = false;
        for i in 0..(len - gap) {
            if is_less(&v[i + gap], &v[i]) {
                v.swap(i, i + gap);
                swapped = true;
            }
        }

        if gap == 1 {
            if !swapped {
                break;
            }

            // At gap 1 this is bubble sort, which settles any total order within `len` passes.
            // Only an inconsistent comparator can keep swapping beyond that.
            unit_gap_passes += 1;
            if unit_gap_passes >= len {
                break;
            }
        }
    }
}
