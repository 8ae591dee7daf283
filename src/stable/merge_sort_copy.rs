//! Merge sorts that merge through an auxiliary buffer.
//!
//! Both variants take the buffer from the caller, it must have the same length as the slice to
//! sort. The sorted result always ends up in the input slice, the buffer content afterwards is
//! unspecified. Elements are cloned into the buffer, hence `T: Clone`.
//!
//! [`bottom_up`] merges runs of width 1, 2, 4, ... iteratively and copies the buffer back after
//! every pass. [`top_down`] splits recursively and alternates the roles of slice and buffer
//! between levels, so it only copies once up front.

use crate::SortError;

// Like `sort_impl!`, but allocates the auxiliary buffer for the harness.
macro_rules! buffered_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let mut buf = arr.to_vec();
                merge_sort(arr, &mut buf, &mut |a, b| a.lt(b));
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], mut compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                let mut buf = arr.to_vec();
                merge_sort(arr, &mut buf, &mut |a, b| {
                    compare(a, b) == std::cmp::Ordering::Less
                });
            }
        }
    };
}

pub mod bottom_up {
    use std::cmp::Ordering;

    use super::{check_buffer, merge_into};
    use crate::SortError;

    buffered_sort_impl!("merge_sort_copy_bottom_up_stable");

    /// Sorts `v` with an iterative bottom-up merge sort, using `buf` as scratch space.
    ///
    /// Stable and *O*(*n* \* log(*n*)) worst-case.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::BufferLengthMismatch`] if `buf.len() != v.len()`, leaving `v`
    /// untouched.
    #[inline]
    pub fn sort<T>(v: &mut [T], buf: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Clone,
    {
        check_buffer(v, buf)?;
        merge_sort(v, buf, &mut |a, b| a.lt(b));
        Ok(())
    }

    /// Sorts `v` with the bottom-up merge sort using a comparator function.
    #[inline]
    pub fn sort_by<T, F>(v: &mut [T], buf: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        check_buffer(v, buf)?;
        merge_sort(v, buf, &mut |a, b| compare(a, b) == Ordering::Less);
        Ok(())
    }

    /// `buf.len()` must equal `v.len()`.
    pub(crate) fn merge_sort<T, F>(v: &mut [T], buf: &mut [T], is_less: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        debug_assert_eq!(len, buf.len());

        let mut width = 1;
        while width < len {
            let mut lo = 0;
            while lo < len {
                let mid = lo.saturating_add(width).min(len);
                let hi = lo.saturating_add(2 * width).min(len);
                merge_into(&v[lo..hi], &mut buf[lo..hi], mid - lo, is_less);
                lo = hi;
            }

            v.clone_from_slice(buf);
            width *= 2;
        }
    }
}

pub mod top_down {
    use std::cmp::Ordering;

    use super::{check_buffer, merge_into};
    use crate::SortError;

    buffered_sort_impl!("merge_sort_copy_top_down_stable");

    /// Sorts `v` with a recursive top-down merge sort, using `buf` as scratch space.
    ///
    /// Stable and *O*(*n* \* log(*n*)) worst-case. If `compare` panics, `v` may hold duplicates
    /// of some elements and miss others, since both slices are written during the recursion.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::BufferLengthMismatch`] if `buf.len() != v.len()`, leaving `v`
    /// untouched.
    #[inline]
    pub fn sort<T>(v: &mut [T], buf: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Clone,
    {
        check_buffer(v, buf)?;
        merge_sort(v, buf, &mut |a, b| a.lt(b));
        Ok(())
    }

    /// Sorts `v` with the top-down merge sort using a comparator function.
    #[inline]
    pub fn sort_by<T, F>(v: &mut [T], buf: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        check_buffer(v, buf)?;
        merge_sort(v, buf, &mut |a, b| compare(a, b) == Ordering::Less);
        Ok(())
    }

    /// `buf.len()` must equal `v.len()`.
    pub(crate) fn merge_sort<T, F>(v: &mut [T], buf: &mut [T], is_less: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert_eq!(v.len(), buf.len());

        if v.len() < 2 {
            return;
        }

        buf.clone_from_slice(v);
        split_merge(buf, v, is_less);
    }

    /// Sorts the elements of `src` into `dst`. Both must hold the same elements on entry, `src`
    /// is clobbered.
    fn split_merge<T, F>(src: &mut [T], dst: &mut [T], is_less: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let len = dst.len();
        if len < 2 {
            return;
        }

        let mid = len / 2;

        // Sort both halves into `src`, with `dst` serving as their scratch space.
        split_merge(&mut dst[..mid], &mut src[..mid], is_less);
        split_merge(&mut dst[mid..], &mut src[mid..], is_less);

        merge_into(src, dst, mid, is_less);
    }
}

fn check_buffer<T>(v: &[T], buf: &[T]) -> Result<(), SortError> {
    if v.len() != buf.len() {
        return Err(SortError::BufferLengthMismatch {
            len: v.len(),
            buffer_len: buf.len(),
        });
    }

    Ok(())
}

/// Merges the sorted runs `src[..mid]` and `src[mid..]` into `dst`. On ties the left run wins.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_into<T, F>(src: &[T], dst: &mut [T], mid: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = src.len();
    debug_assert_eq!(len, dst.len());

    let mut left = 0;
    let mut right = mid;

    for out in dst.iter_mut() {
        let take_left = left < mid && (right >= len || !is_less(&src[right], &src[left]));

        if take_left {
            out.clone_from(&src[left]);
            left += 1;
        } else {
            out.clone_from(&src[right]);
            right += 1;
        }
    }
}
