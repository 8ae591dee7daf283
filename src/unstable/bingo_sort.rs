use std::cmp::Ordering;

use crate::exchange;

sort_impl!("bingo_sort_unstable");

/// Sorts the slice with bingo sort.
///
/// Each pass moves every element equal to the current smallest value to the front of the
/// unsorted region, while looking out for the next smallest value. That makes it
/// *O*(*n* \* *d*) for `d` distinct values, and *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bingo_sort(v, &mut |a: &T, b: &T| a.cmp(b));
}

/// Sorts the slice with bingo sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bingo_sort(v, &mut compare);
}

// --- IMPL ---

// Needs equality as well as less-than, so this one works on the three-way comparison directly.
fn bingo_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut next = 0;
    for i in 1..len {
        if compare(&v[i], &v[next]) == Ordering::Less {
            next = i;
        }
    }

    let mut placed = 0;
    loop {
        // The first placed element of a pass is the reference all others get compared to.
        exchange::swap(v, placed, next);
        let target = placed;
        placed += 1;

        // `v[placed..i]` only holds elements that differ from the target.
        let mut candidate: Option<usize> = None;
        for i in placed..len {
            if compare(&v[i], &v[target]) == Ordering::Equal {
                exchange::swap(v, i, placed);
                if candidate == Some(placed) {
                    candidate = Some(i);
                }
                placed += 1;
            } else if candidate.map_or(true, |c| compare(&v[i], &v[c]) == Ordering::Less) {
                candidate = Some(i);
            }
        }

        match candidate {
            Some(c) => next = c,
            None => break,
        }
    }
}
