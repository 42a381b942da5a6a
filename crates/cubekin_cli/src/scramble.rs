//! Reproducible random scrambles.

use cubekin::Move;
use eyre::{Result, ensure};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sha2::Digest;

/// Parameters to deterministically generate a scramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScrambleParams {
    /// Number of moves.
    pub length: u32,
    /// Random seed. The same seed always produces the same scramble.
    pub seed: String,
}

impl ScrambleParams {
    /// Constructs parameters for a scramble, using a fresh random seed if
    /// `seed` is `None`.
    pub fn new(length: u32, seed: Option<String>) -> Self {
        let seed = seed.unwrap_or_else(random_seed);
        Self { length, seed }
    }

    /// Generates the scramble by choosing uniformly from `moves`.
    pub fn generate(&self, moves: &[Move]) -> Result<Vec<Move>> {
        ensure!(!moves.is_empty(), "no moves to scramble with");

        let digest = sha2::Sha256::digest(self.seed.as_bytes());
        let mut rng = rand_chacha::ChaCha12Rng::from_seed(digest.into());

        let scramble: Vec<Move> = std::iter::from_fn(|| moves.choose(&mut rng).copied())
            .take(self.length as usize)
            .collect();
        log::debug!(
            "generated {} scramble moves from seed {:?}",
            scramble.len(),
            self.seed,
        );
        Ok(scramble)
    }
}

fn random_seed() -> String {
    format!("{:016x}", rand::rng().random::<u64>())
}
