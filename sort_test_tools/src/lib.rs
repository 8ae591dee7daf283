//! Test and benchmark support shared by every sort in `sort_toolkit`.
//!
//! A sort implementation plugs in by implementing [`Sort`], after which the
//! `instantiate_*_tests!` macros stamp out the common property suite for it.

use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// Instantiates the property suite every sort has to pass: sortedness and permutation over all
/// input patterns, idempotence, custom comparators and termination under invalid orderings.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::__instantiate_tests!(
            $sort_impl,
            sort,
            [
                basic,
                random,
                random_narrow,
                random_binary,
                random_zipf,
                random_sorted,
                all_equal,
                ascending,
                descending,
                saw_mixed,
                pipe_organ,
                int_edge,
                random_u64,
                random_str,
                random_boxed,
                idempotent,
                comp_reverse,
                comp_by_key,
                violate_ord_retain_original_set,
            ]
        );
    };
}

/// Instantiates the checks that equal elements keep their input order.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::__instantiate_tests!(
            $sort_impl,
            stable,
            [
                stability_random,
                stability_binary,
                stability_all_equal,
                stability_descending
            ]
        );
    };
}

/// Instantiates the check that a panicking comparator leaves every original element in place.
#[macro_export]
macro_rules! instantiate_panic_safety_tests {
    ($sort_impl:ty) => {
        $crate::__instantiate_tests!($sort_impl, panic, [panic_retain_original_set]);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __instantiate_tests {
    ($sort_impl:ty, $prefix:ident, [$($test_fn:ident),* $(,)?]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$prefix _ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            )*
        }
    };
}
