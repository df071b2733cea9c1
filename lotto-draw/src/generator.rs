use lotto_core::{types::is_valid_number, DrawResult, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Uniform source of candidate numbers for a draw
pub trait RandomSource {
    /// A uniformly distributed number in `1..=45`.
    fn next_number(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_number(&mut self) -> u8 {
        (**self).next_number()
    }
}

/// Backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_number(&mut self) -> u8 {
        rand::thread_rng().gen_range(MIN_NUMBER..=MAX_NUMBER)
    }
}

/// Reproducible source for `--seed` runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_number(&mut self) -> u8 {
        self.rng.gen_range(MIN_NUMBER..=MAX_NUMBER)
    }
}

/// Draw six distinct numbers by rejection sampling.
///
/// Duplicates (and anything a misbehaving source yields outside `1..=45`) are
/// discarded and sampled again. There is no attempt limit.
pub fn generate(source: &mut dyn RandomSource) -> DrawResult {
    let mut picked = BTreeSet::new();
    let mut attempts = 0u32;

    while picked.len() < DRAW_SIZE {
        let candidate = source.next_number();
        attempts += 1;
        if is_valid_number(candidate) {
            picked.insert(candidate);
        } else {
            tracing::warn!("Random source yielded out-of-range number {}", candidate);
        }
    }

    let numbers: Vec<u8> = picked.into_iter().collect();
    tracing::debug!("Generated {:?} after {} samples", numbers, attempts);

    match DrawResult::new(&numbers) {
        Ok(draw) => draw,
        Err(e) => unreachable!("six distinct in-range numbers rejected: {}", e),
    }
}
