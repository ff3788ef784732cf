//! Domain-bounded stimulus sampler.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Draws uniform pseudorandom stimulus values within the input domain of the
/// device under test.
///
/// The pseudorandom generator is owned by the sampler and explicitly seeded,
/// so a run can be reproduced by passing the same seed. Draws go through
/// `random_range`, which reduces the raw generator output by rejection
/// rather than a modulo, keeping the distribution uniform even when the
/// domain size is not a power of two.
pub struct DomainSampler {
    rng: StdRng,
    domain_max: u64,
}

impl DomainSampler {
    /// Creates a sampler producing values in `[0, domain_max]`.
    pub fn new(domain_max: u64, seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), domain_max }
    }

    /// Draws the next stimulus value, advancing the generator state.
    pub fn next(&mut self) -> u64 {
        self.rng.random_range(0..=self.domain_max)
    }
}

/// Seed derived from the wall clock, with second granularity.
///
/// The testbench only needs statistical coverage of the domain, so a coarse
/// clock seed is sufficient; pass an explicit seed for reproducible runs.
pub fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecgen_core::DOMAIN_MAX;

    #[test]
    fn test_draws_stay_in_domain() {
        let mut sampler = DomainSampler::new(DOMAIN_MAX, 1234);
        for _ in 0..10_000 {
            assert!(sampler.next() <= DOMAIN_MAX);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = DomainSampler::new(DOMAIN_MAX, 42);
        let mut second = DomainSampler::new(DOMAIN_MAX, 42);
        for _ in 0..100 {
            assert_eq!(first.next(), second.next());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut first = DomainSampler::new(DOMAIN_MAX, 1);
        let mut second = DomainSampler::new(DOMAIN_MAX, 2);
        let draws_first: Vec<u64> = (0..64).map(|_| first.next()).collect();
        let draws_second: Vec<u64> = (0..64).map(|_| second.next()).collect();
        assert_ne!(draws_first, draws_second);
    }

    #[test]
    fn test_degenerate_domain_is_constant() {
        let mut sampler = DomainSampler::new(0, 7);
        for _ in 0..10 {
            assert_eq!(sampler.next(), 0);
        }
    }
}
