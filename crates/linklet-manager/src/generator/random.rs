use crate::generator::Generator;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Generates identifiers by sampling alphanumeric characters from the
/// thread-local RNG.
///
/// The 62-character alphabet gives enough entropy that collisions are
/// driven by identifier-space pressure rather than generator bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self, length: usize) -> String {
        let rng = rand::rng();
        rng.sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
