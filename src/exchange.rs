//! Element exchange primitives the sorts are built from.

use std::ptr;

/// Swaps `v[i]` and `v[j]`, returning `false` without touching the slice if `i == j`.
///
/// # Panics
///
/// Panics if `i` or `j` are out of bounds.
#[inline]
pub fn swap<T>(v: &mut [T], i: usize, j: usize) -> bool {
    let len = v.len();
    assert!(
        i < len && j < len,
        "swap indices ({i}, {j}) out of bounds for length {len}"
    );

    if i == j {
        return false;
    }

    v.swap(i, j);
    true
}

/// Rotates the whole slice by `k` positions. Positive values move elements toward the end,
/// negative values toward the start. `k` is taken modulo the slice length.
///
/// Uses three reversals and no extra memory.
pub fn rotate<T>(v: &mut [T], k: isize) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // Slices never hold more than `isize::MAX` elements.
    let shift = k.rem_euclid(len as isize) as usize;
    if shift == 0 {
        return;
    }

    v.reverse();
    v[..shift].reverse();
    v[shift..].reverse();
}

/// Moves `v[0]` to the end, shifting everything else one position to the left.
#[inline]
pub fn rotate_left_1<T>(v: &mut [T]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // SAFETY: `len >= 2`, so `base` and `base.add(1)` are in-bounds and the shifted range
    // `[1, len)` maps onto `[0, len - 1)`. `ptr::copy` handles the overlap. Nothing between the
    // read and the write can panic, so the duplicated bits in `tmp` never get observed twice.
    unsafe {
        let base = v.as_mut_ptr();
        let tmp = ptr::read(base);
        ptr::copy(base.add(1), base, len - 1);
        ptr::write(base.add(len - 1), tmp);
    }
}

/// Moves the last element to the front, shifting everything else one position to the right.
#[inline]
pub fn rotate_right_1<T>(v: &mut [T]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // SAFETY: See `rotate_left_1`, mirrored.
    unsafe {
        let base = v.as_mut_ptr();
        let tmp = ptr::read(base.add(len - 1));
        ptr::copy(base, base.add(1), len - 1);
        ptr::write(base, tmp);
    }
}
