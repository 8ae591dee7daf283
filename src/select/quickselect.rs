use std::cmp::Ordering;

use crate::unstable::quicksort_lomuto::partition;
use crate::SortError;

/// Returns the element that would sit at index `k` if `v[left..=right]` were sorted.
///
/// Runs quicksort's Lomuto partition repeatedly, but only keeps the side containing `k`, which
/// gives expected *O*(*n*) time and *O*(*n*^2) worst-case. On return `v[k]` holds the result,
/// elements of `v[left..k]` are not greater and elements of `v[k + 1..=right]` are not less.
/// Nothing outside `v[left..=right]` is touched.
///
/// # Errors
///
/// Requires `left <= k <= right < v.len()`. Violations are reported before `v` is modified.
#[inline]
pub fn select<T>(v: &mut [T], left: usize, right: usize, k: usize) -> Result<&T, SortError>
where
    T: Ord,
{
    check_bounds(v.len(), left, right, k)?;
    Ok(quickselect(v, left, right, k, &mut |a, b| a.lt(b)))
}

/// Same as [`select`] but with a comparator function.
#[inline]
pub fn select_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    k: usize,
    mut compare: F,
) -> Result<&T, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_bounds(v.len(), left, right, k)?;
    Ok(quickselect(v, left, right, k, &mut |a, b| {
        compare(a, b) == Ordering::Less
    }))
}

/// Returns the `k`-th smallest element of the whole slice, zero based.
#[inline]
pub fn select_nth<T>(v: &mut [T], k: usize) -> Result<&T, SortError>
where
    T: Ord,
{
    let right = v.len().saturating_sub(1);
    select(v, 0, right, k)
}

/// Same as [`select_nth`] but with a comparator function.
#[inline]
pub fn select_nth_by<T, F>(v: &mut [T], k: usize, compare: F) -> Result<&T, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let right = v.len().saturating_sub(1);
    select_by(v, 0, right, k, compare)
}

// --- IMPL ---

fn check_bounds(len: usize, left: usize, right: usize, k: usize) -> Result<(), SortError> {
    if len == 0 {
        return Err(SortError::EmptyRange);
    }

    if right >= len {
        return Err(SortError::RightOutOfBounds { right, len });
    }

    if left > right {
        return Err(SortError::LeftAfterRight { left, right });
    }

    if k < left || k > right {
        return Err(SortError::IndexOutsideRange { k, left, right });
    }

    Ok(())
}

fn quickselect<'a, T, F>(
    v: &'a mut [T],
    mut left: usize,
    mut right: usize,
    k: usize,
    is_less: &mut F,
) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    // `left <= k <= right` holds throughout, so the range shrinks until it is `[k, k]` or the
    // pivot lands on `k`.
    while left < right {
        let pivot_pos = left + partition(&mut v[left..=right], is_less);

        match k.cmp(&pivot_pos) {
            Ordering::Equal => break,
            Ordering::Less => right = pivot_pos - 1,
            Ordering::Greater => left = pivot_pos + 1,
        }
    }

    &v[k]
}
