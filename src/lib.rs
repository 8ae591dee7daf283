//! In-place comparison sorts and order statistics over mutable slices.
//!
//! Every sort lives in its own module and exposes the same pair of entry points, `sort` for the
//! natural order of `T: Ord` and `sort_by` for a caller supplied comparison. Modules under
//! [`stable`] never reorder elements that compare equal, modules under [`unstable`] may.
//! [`select`] finds the k-th smallest element without sorting the whole slice.

// Generates a `SortImpl` unit struct wiring the module's `sort` and `sort_by` into the shared
// test and benchmark harness.
macro_rules! sort_impl {
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
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod error;
pub mod exchange;
pub mod merge;
pub mod select;
pub mod stable;
pub mod unstable;

mod heap;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use merge::MergeStrategy;

