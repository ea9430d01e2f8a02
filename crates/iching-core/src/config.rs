//! Configuration for a reading engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a [`ReadingEngine`](crate::ReadingEngine).
#[derive(Debug, Clone, Default)]
pub struct ReadingConfig {
    /// RNG seed for reproducible readings. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine's single RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_is_unseeded() {
        assert_eq!(ReadingConfig::default().seed, None);
    }

    #[test]
    fn with_seed() {
        let cfg = ReadingConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }

    #[test]
    fn seeded_rngs_agree() {
        let cfg = ReadingConfig::default().with_seed(5);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
