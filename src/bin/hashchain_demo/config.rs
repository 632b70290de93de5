// Demo configuration

use clap::ValueEnum;

use hashchain_rng::generator::{validate_seed, DEFAULT_HEX_LENGTH, MAX_SEED, MIN_SEED};
use hashchain_rng::{GeneratorError, Result};

pub const DEFAULT_INTEGERS: usize = 5;
pub const DEFAULT_HEX_STRINGS: usize = 3;
pub const DEFAULT_AVALANCHE_ITERATIONS: usize = 5;
/// Longest hex string the demo will print on one line
pub const MAX_HEX_LENGTH: usize = 4096;

/// Hash backend selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HashKind {
    #[default]
    Sha256,
    Sha3,
}

/// What the demo prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: i64,
    pub integers: usize,
    pub hex_strings: usize,
    pub hex_length: usize,
    pub avalanche_iterations: usize,
    pub hash: HashKind,
}

impl DemoConfig {
    pub fn new(seed: i64) -> Self {
        DemoConfig {
            seed,
            integers: DEFAULT_INTEGERS,
            hex_strings: DEFAULT_HEX_STRINGS,
            hex_length: DEFAULT_HEX_LENGTH,
            avalanche_iterations: DEFAULT_AVALANCHE_ITERATIONS,
            hash: HashKind::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_seed(self.seed)?;
        if self.hex_length > MAX_HEX_LENGTH {
            return Err(GeneratorError::InvalidArgument(format!(
                "hex length {} exceeds the demo limit of {}",
                self.hex_length, MAX_HEX_LENGTH
            )));
        }
        if self.avalanche_iterations == 0 {
            return Err(GeneratorError::InvalidArgument(
                "avalanche iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Seed for the second generator of the avalanche comparison.
    ///
    /// Normally `seed + 1`; the top of the range falls back to `seed - 1`.
    pub fn neighbour_seed(&self) -> i64 {
        if self.seed < MAX_SEED {
            self.seed + 1
        } else {
            (self.seed - 1).max(MIN_SEED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::new(1234);
        assert_eq!(config.integers, 5);
        assert_eq!(config.hex_strings, 3);
        assert_eq!(config.hex_length, 32);
        assert_eq!(config.avalanche_iterations, 5);
        assert_eq!(config.hash, HashKind::Sha256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            DemoConfig::new(42).validate(),
            Err(GeneratorError::InvalidSeed(42))
        );

        let mut config = DemoConfig::new(1234);
        config.avalanche_iterations = 0;
        assert!(matches!(config.validate(), Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_hex_length() {
        let mut config = DemoConfig::new(1234);
        config.hex_length = 0;
        assert!(config.validate().is_ok());

        config.hex_length = MAX_HEX_LENGTH;
        assert!(config.validate().is_ok());

        config.hex_length = MAX_HEX_LENGTH + 1;
        assert!(matches!(config.validate(), Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_neighbour_seed() {
        assert_eq!(DemoConfig::new(1234).neighbour_seed(), 1235);
        assert_eq!(DemoConfig::new(9999).neighbour_seed(), 9998);
    }
}
