use std::cmp::Ordering;

use crate::SortError;

sort_impl!("shell_sort_ciura_unstable");

/// Marcin Ciura's experimentally derived gap sequence.
pub const CIURA_GAPS: &[usize] = &[701, 301, 132, 57, 23, 10, 4, 1];

/// Sorts the slice with Shell sort over [`CIURA_GAPS`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, CIURA_GAPS, &mut |a, b| a.lt(b));
}

/// Sorts the slice with Shell sort over [`CIURA_GAPS`] using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, CIURA_GAPS, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with Shell sort over a custom gap sequence.
///
/// Gaps not smaller than the slice length are skipped.
///
/// # Errors
///
/// `gaps` must be non-empty, strictly decreasing, free of zeros and end in 1. Otherwise the
/// matching [`SortError`] is returned and `v` is left untouched.
#[inline]
pub fn sort_with_gaps<T>(v: &mut [T], gaps: &[usize]) -> Result<(), SortError>
where
    T: Ord,
{
    validate_gaps(gaps)?;
    shell_sort(v, gaps, &mut |a, b| a.lt(b));
    Ok(())
}

/// Sorts the slice with Shell sort over a custom gap sequence using a comparator function.
///
/// # Errors
///
/// See [`sort_with_gaps`].
#[inline]
pub fn sort_by_with_gaps<T, F>(
    v: &mut [T],
    gaps: &[usize],
    mut compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    validate_gaps(gaps)?;
    shell_sort(v, gaps, &mut |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

/// Checks that `gaps` is usable as a Shell sort gap sequence.
pub fn validate_gaps(gaps: &[usize]) -> Result<(), SortError> {
    let Some(&last) = gaps.last() else {
        return Err(SortError::EmptyGapSequence);
    };

    if let Some(index) = gaps.iter().position(|&gap| gap == 0) {
        return Err(SortError::ZeroGap { index });
    }

    if let Some(index) = gaps.windows(2).position(|w| w[1] >= w[0]) {
        return Err(SortError::GapsNotDecreasing { index: index + 1 });
    }

    if last != 1 {
        return Err(SortError::GapSequenceMissingFinalOne { last });
    }

    Ok(())
}

// --- IMPL ---

fn shell_sort<T, F>(v: &mut [T], gaps: &[usize], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for &gap in gaps.iter().filter(|&&gap| gap < len) {
        gapped_insertion_pass(v, gap, is_less);
    }
}

/// Insertion sort where neighbours are `gap` apart.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn gapped_insertion_pass<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in gap..v.len() {
        let mut j = i;
        while j >= gap && is_less(&v[j], &v[j - gap]) {
            v.swap(j, j - gap);
            j -= gap;
        }
    }
}
