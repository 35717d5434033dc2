//! Hash combining
//!
//! Folds already-computed hashes into a running seed. Each step mixes the
//! current seed back in through two shifts, so the fold is order-sensitive
//! and regular patterns in the inputs get spread across all bits.

/// 32-bit golden ratio constant, added on every step.
pub const GOLDEN_RATIO: u64 = 0x9e37_79b9;

const LEFT_SHIFT: u32 = 6;
const RIGHT_SHIFT: u32 = 2;

/// One combining step: `seed ^= hash + GOLDEN_RATIO + (seed << 6) + (seed >> 2)`.
///
/// Additions wrap, shifted-out bits are discarded.
#[inline]
pub fn combine_one(seed: &mut u64, hash: u64) {
    let mixed = hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(*seed << LEFT_SHIFT)
        .wrapping_add(*seed >> RIGHT_SHIFT);
    *seed ^= mixed;
}

/// Folds `hashes` into `seed` left to right. An empty slice leaves `seed` alone.
pub fn combine(seed: &mut u64, hashes: &[u64]) {
    for &hash in hashes {
        combine_one(seed, hash);
    }
}

/// Same fold as [`combine`], but by value over any iterator.
pub fn combined<I>(seed: u64, hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    hashes.into_iter().fold(seed, |mut acc, hash| {
        combine_one(&mut acc, hash);
        acc
    })
}

/// Variadic form: `hash_combine!(seed; h1, h2, h3)` combines each hash into
/// the `u64` place `seed`, in the order written.
#[macro_export]
macro_rules! hash_combine {
    ($seed:expr; $($hash:expr),+ $(,)?) => {{
        $( $crate::combine::combine_one(&mut $seed, $hash); )+
    }};
    ($seed:expr $(;)?) => {{
        let _: &mut u64 = &mut $seed;
    }};
}
