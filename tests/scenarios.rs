//! Algorithm specific behaviour that the shared property suite does not cover.

use std::cell::Cell;
use std::cmp::Ordering;

use rand::prelude::*;

use sort_toolkit::algorithm::{Algorithm, ALL_ALGORITHMS};
use sort_toolkit::stable::{
    bubble_sort, insertion_sort, merge_sort_copy, merge_sort_shift, selection_sort,
};
use sort_toolkit::unstable::{
    bingo_sort, comb_sort, heapsort_basic, heapsort_floyd, quicksort_lomuto, shell_sort,
};
use sort_toolkit::{merge, MergeStrategy, SortError};

fn shuffled(len: usize, seed: u64) -> Vec<i32> {
    let mut v: Vec<i32> = (1..=len as i32).collect();
    v.shuffle(&mut StdRng::seed_from_u64(seed));
    v
}

#[test]
fn bubble_sort_small() {
    let mut v = [5, 3, 1, 4, 2];
    bubble_sort::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn insertion_sort_empty() {
    let mut v: [i32; 0] = [];
    insertion_sort::sort(&mut v);
    assert!(v.is_empty());
}

#[test]
fn every_sort_handles_single_element() {
    for algorithm in ALL_ALGORITHMS {
        let mut v = [42];
        algorithm.sort(&mut v);
        assert_eq!(v, [42], "{algorithm}");
    }
}

#[test]
fn every_sort_leaves_all_equal_keys_unchanged() {
    for algorithm in ALL_ALGORITHMS {
        let mut v: Vec<(u8, usize)> = (0..37).map(|i| (7, i)).collect();
        let expected = v.clone();

        // Only the key takes part in the comparison. Unstable sorts may still move elements,
        // but a sort that never exchanges equal elements leaves the tags alone.
        algorithm.sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        if algorithm.is_stable() {
            assert_eq!(v, expected, "{algorithm}");
        } else {
            assert!(v.iter().all(|&(key, _)| key == 7), "{algorithm}");
        }
    }
}

#[test]
fn bottom_up_copy_merge_keeps_duplicate_pairs_in_order() {
    let keys = [3, 3, 1, 1, 2, 2];
    let mut v: Vec<(i32, char)> = keys.iter().copied().zip("abcdef".chars()).collect();
    let mut buf = v.clone();

    merge_sort_copy::bottom_up::sort_by(&mut v, &mut buf, |a, b| a.0.cmp(&b.0)).unwrap();

    assert_eq!(
        v,
        [(1, 'c'), (1, 'd'), (2, 'e'), (2, 'f'), (3, 'a'), (3, 'b')]
    );
}

#[test]
fn top_down_copy_merge_sorts_into_input() {
    let mut v = shuffled(100, 7);
    let mut buf = vec![0; v.len()];

    merge_sort_copy::top_down::sort(&mut v, &mut buf).unwrap();

    assert_eq!(v, (1..=100).collect::<Vec<_>>());
}

#[test]
fn copy_merge_rejects_mismatched_buffer() {
    let mut v = vec![3, 1, 2];
    let mut buf = vec![0; 2];

    assert_eq!(
        merge_sort_copy::bottom_up::sort(&mut v, &mut buf),
        Err(SortError::BufferLengthMismatch {
            len: 3,
            buffer_len: 2
        })
    );
    assert_eq!(
        merge_sort_copy::top_down::sort(&mut v, &mut buf),
        Err(SortError::BufferLengthMismatch {
            len: 3,
            buffer_len: 2
        })
    );
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn heapsort_variants_agree() {
    let input = shuffled(100, 0x5EED);

    let mut basic = input.clone();
    heapsort_basic::sort(&mut basic);

    let mut floyd = input;
    heapsort_floyd::sort(&mut floyd);

    assert_eq!(basic, floyd);
    assert_eq!(basic, (1..=100).collect::<Vec<_>>());
}

#[test]
fn heapsort_floyd_needs_fewer_comparisons() {
    let input = shuffled(1_000, 42);

    let count_comparisons = |sort_by: fn(&mut [i32], &mut dyn FnMut(&i32, &i32) -> Ordering)| {
        let calls = Cell::new(0usize);
        let mut v = input.clone();
        sort_by(&mut v, &mut |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        calls.get()
    };

    let basic = count_comparisons(|v, compare| heapsort_basic::sort_by(v, compare));
    let floyd = count_comparisons(|v, compare| heapsort_floyd::sort_by(v, compare));

    assert!(floyd < basic, "floyd {floyd} vs basic {basic}");
}

#[test]
fn shell_sort_with_unit_gap_matches_insertion_sort() {
    let keys = shuffled(200, 3).into_iter().map(|v| v % 13);
    let input: Vec<(i32, usize)> = keys.zip(0..).collect();

    let mut shell = input.clone();
    shell_sort::sort_by_with_gaps(&mut shell, &[1], |a, b| a.0.cmp(&b.0)).unwrap();

    let mut insertion = input;
    insertion_sort::sort_by(&mut insertion, |a, b| a.0.cmp(&b.0));

    assert_eq!(shell, insertion);
}

#[test]
fn shell_sort_custom_gaps() {
    let mut v = shuffled(500, 11);
    shell_sort::sort_with_gaps(&mut v, &[1_000, 40, 13, 4, 1]).unwrap();
    assert_eq!(v, (1..=500).collect::<Vec<_>>());
}

#[test]
fn shell_sort_rejects_invalid_gaps() {
    let mut v = vec![3, 2, 1];

    assert_eq!(
        shell_sort::sort_with_gaps(&mut v, &[]),
        Err(SortError::EmptyGapSequence)
    );
    assert_eq!(
        shell_sort::sort_with_gaps(&mut v, &[4, 0, 1]),
        Err(SortError::ZeroGap { index: 1 })
    );
    assert_eq!(
        shell_sort::sort_with_gaps(&mut v, &[4, 4, 1]),
        Err(SortError::GapsNotDecreasing { index: 1 })
    );
    assert_eq!(
        shell_sort::sort_with_gaps(&mut v, &[10, 4, 2]),
        Err(SortError::GapSequenceMissingFinalOne { last: 2 })
    );
    assert_eq!(v, [3, 2, 1]);

    assert_eq!(shell_sort::validate_gaps(shell_sort::CIURA_GAPS), Ok(()));
}

#[test]
fn bubble_sort_is_linear_on_sorted_input() {
    let mut v: Vec<i32> = (0..1_000).collect();
    let mut calls = 0;
    bubble_sort::sort_by(&mut v, |a, b| {
        calls += 1;
        a.cmp(b)
    });
    assert_eq!(calls, 999);
}

#[test]
fn bubble_sort_stops_at_last_swap() {
    // The only swap of the first pass happens at the front, which leaves nothing to rescan.
    let mut v = [1, 0, 2, 3, 4, 5];
    let mut calls = 0;
    bubble_sort::sort_by(&mut v, |a, b| {
        calls += 1;
        a.cmp(b)
    });
    assert_eq!(v, [0, 1, 2, 3, 4, 5]);
    assert_eq!(calls, 5);
}

#[test]
fn selection_sort_shifts_instead_of_swapping() {
    let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
    selection_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(1, 'c'), (2, 'a'), (2, 'b')]);
}

#[test]
fn bingo_sort_passes_scale_with_distinct_values() {
    let input: Vec<i32> = shuffled(300, 5).into_iter().map(|v| v % 3).collect();

    let mut v = input.clone();
    let mut calls = 0;
    bingo_sort::sort_by(&mut v, |a, b| {
        calls += 1;
        a.cmp(b)
    });

    let mut expected = input;
    expected.sort();
    assert_eq!(v, expected);

    // One minimum search plus at most two comparisons per element and pass, three passes.
    assert!(calls <= 300 + 3 * 2 * 300, "{calls}");
}

#[test]
fn comb_sort_reverse_input() {
    let mut v: Vec<i32> = (0..1_000).rev().collect();
    comb_sort::sort(&mut v);
    assert_eq!(v, (0..1_000).collect::<Vec<_>>());
}

#[test]
fn merge_shift_reverse_input() {
    let mut v: Vec<i32> = (0..513).rev().collect();
    merge_sort_shift::sort(&mut v);
    assert_eq!(v, (0..513).collect::<Vec<_>>());
}

#[test]
fn quicksort_survives_sorted_input() {
    // Lomuto with a last element pivot hits its worst case here, the stack depth must not.
    let mut v: Vec<u32> = (0..10_000).collect();
    quicksort_lomuto::sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn lomuto_partition_places_pivot() {
    let mut v = [7, 2, 9, 4, 1, 5];
    let pivot_pos = quicksort_lomuto::partition_by(&mut v, |a, b| a.cmp(b));

    assert_eq!(pivot_pos, 3);
    assert_eq!(v[pivot_pos], 5);
    assert!(v[..pivot_pos].iter().all(|&x| x < 5));
    assert!(v[pivot_pos + 1..].iter().all(|&x| x >= 5));

    let mut empty: [i32; 0] = [];
    assert_eq!(quicksort_lomuto::partition_by(&mut empty, |a, b| a.cmp(b)), 0);
}

#[test]
fn merge_strategies_agree() {
    let input: Vec<(i32, usize)> = shuffled(257, 9)
        .into_iter()
        .map(|v| v % 10)
        .zip(0..)
        .collect();
    let by_key = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);

    let mut in_place = input.clone();
    merge::sort_by(&mut in_place, MergeStrategy::InPlace, by_key).unwrap();

    let mut bottom_up = input.clone();
    let mut buf = input.clone();
    merge::sort_by(&mut bottom_up, MergeStrategy::BottomUp(&mut buf), by_key).unwrap();

    let mut top_down = input.clone();
    merge::sort_by(&mut top_down, MergeStrategy::TopDown(&mut buf), by_key).unwrap();

    let mut expected = input;
    expected.sort_by(by_key);

    assert_eq!(in_place, expected);
    assert_eq!(bottom_up, expected);
    assert_eq!(top_down, expected);
}

#[test]
fn merge_strategy_reports_buffer_mismatch() {
    let mut v = vec![2, 1];
    let mut buf = vec![0; 5];

    let strategy = MergeStrategy::TopDown(&mut buf);
    assert!(strategy.needs_buffer());
    assert_eq!(strategy.name(), "top_down");

    assert_eq!(
        merge::sort(&mut v, strategy),
        Err(SortError::BufferLengthMismatch {
            len: 2,
            buffer_len: 5
        })
    );
    assert_eq!(merge::sort(&mut v, MergeStrategy::InPlace), Ok(()));
    assert_eq!(v, [1, 2]);
}

#[test]
fn algorithm_registry() {
    assert_eq!(ALL_ALGORITHMS.len(), 12);
    assert_eq!(
        ALL_ALGORITHMS.iter().filter(|a| a.is_stable()).count(),
        6
    );
    assert!(Algorithm::MergeSortCopyTopDown.needs_buffer());
    assert!(!Algorithm::MergeSortShift.needs_buffer());
    assert_eq!(Algorithm::Quicksort.to_string(), "quicksort_lomuto");

    let input = shuffled(300, 1);
    for algorithm in ALL_ALGORITHMS {
        let mut v = input.clone();
        algorithm.sort(&mut v);
        assert_eq!(v, (1..=300).collect::<Vec<_>>(), "{algorithm}");
    }
}

#[test]
fn error_messages_name_the_argument() {
    let err = SortError::IndexOutsideRange {
        k: 9,
        left: 0,
        right: 4,
    };
    assert_eq!(err.to_string(), "Index 9 is outside the selection range [0, 4]");

    let err = SortError::BufferLengthMismatch {
        len: 3,
        buffer_len: 2,
    };
    assert!(err.to_string().contains("buffer has 2"));
}
