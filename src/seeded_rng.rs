//! Reproducible random number streams derived from a single seed.

use blake2::{Blake2b512, Digest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Make a random number generator for one named stream of draws.
///
/// A single integer seed controls all randomness in a generator, but the
/// generator needs more than one source: patient field values and synthetic
/// names are drawn from separate streams so that consuming one kind of draw
/// never shifts the other. Each stream gets its own id, which is hashed
/// together with the seed to produce the 32-byte state of a ChaCha8 generator.
///
/// Two calls with the same seed and id return identical streams; changing
/// either the seed or the id produces an unrelated stream. Reusing an id with
/// the same seed therefore means reusing the same sequence of draws.
pub fn stream_rng(seed: u64, stream_id: &str) -> ChaCha8Rng {
    let mut hasher = Blake2b512::new();
    hasher.update(stream_id.as_bytes());
    hasher.update(seed.to_le_bytes());
    let hash = hasher.finalize();

    let mut rng_seed = [0u8; 32];
    rng_seed.copy_from_slice(&hash[..32]);
    ChaCha8Rng::from_seed(rng_seed)
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::Rng;

    fn first_draws(seed: u64, stream_id: &str) -> Vec<u32> {
        let mut rng = stream_rng(seed, stream_id);
        (0..4).map(|_| rng.gen()).collect()
    }

    #[test]
    fn same_seed_and_id_reproduce_the_stream() {
        assert_eq!(first_draws(42, "patient_values"), first_draws(42, "patient_values"));
    }

    #[test]
    fn different_ids_give_unrelated_streams() {
        assert_ne!(first_draws(42, "patient_values"), first_draws(42, "patient_names"));
    }

    #[test]
    fn different_seeds_give_unrelated_streams() {
        assert_ne!(first_draws(0, "patient_values"), first_draws(1, "patient_values"));
    }
}
