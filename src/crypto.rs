// src/crypto.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// The operating system CSPRNG every adapter draws from.
pub fn secure_rng() -> OsRng {
    OsRng
}

/// Uniform integer in `[0, bound)`.
///
/// `Uniform` rejects samples outside the largest multiple of `bound`, so
/// there is no modulo bias for any bound. Returns `None` for an empty range.
pub fn random_index<R: RngCore + CryptoRng>(rng: &mut R, bound: usize) -> Option<usize> {
    if bound == 0 {
        return None;
    }
    Some(Uniform::from(0..bound).sample(rng))
}

/// Pick one element uniformly at random.
pub fn pick<R: RngCore + CryptoRng, T: Copy>(rng: &mut R, items: &[T]) -> Option<T> {
    random_index(rng, items.len()).map(|i| items[i])
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<R: RngCore + CryptoRng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        if let Some(j) = random_index(rng, i + 1) {
            items.swap(i, j);
        }
    }
}
