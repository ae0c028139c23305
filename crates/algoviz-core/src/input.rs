//! Array input helpers: parsing typed input and generating random input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::CoreError;

/// Smallest value produced by [`random_array`].
pub const RANDOM_MIN: i64 = 1;
/// Largest value produced by [`random_array`].
pub const RANDOM_MAX: i64 = 99;

/// Parses a comma- or whitespace-separated list of integers, e.g. `"5, 3,8 1"`.
///
/// An empty or blank string is the empty array.
pub fn parse_array(text: &str) -> Result<Vec<i64>, CoreError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| CoreError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Generates `len` values in `RANDOM_MIN..=RANDOM_MAX` from a seeded ChaCha8
/// stream. The same `(len, seed)` always yields the same array, so a random
/// input can be replayed exactly.
pub fn random_array(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(RANDOM_MIN..=RANDOM_MAX))
        .collect()
}
