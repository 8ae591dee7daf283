use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Returns the seed all patterns of this process derive from.
///
/// Set `OVERRIDE_SEED=<u64>` to replay a failing run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

pub fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=1)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values where the first `sorted_percent` of the slice is already sorted.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// `saw_count` runs, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  :.
    // .:::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let saw_len = (len / saw_count.max(1)).max(1);
    let mut rng = new_seeded_rng();

    for chunk in v.chunks_mut(saw_len) {
        if rng.gen::<bool>() {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let mid = len / 2;

    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by(|a, b| b.cmp(a));

    v
}
