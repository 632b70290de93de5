// Entropy sources mixed into the initial chain digest

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of OS random bytes folded into every seeding
pub const OS_ENTROPY_BYTES: usize = 16;

/// Source of the two hidden inputs used at construction
pub trait EntropySource {
    /// Current time in nanoseconds
    fn timestamp_nanos(&mut self) -> u128;

    /// Generate random bytes
    fn random_bytes(&mut self, size: usize) -> Vec<u8>;
}

/// Wall clock plus the operating system CSPRNG
#[derive(Debug, Default)]
pub struct SystemEntropy {
    rng: OsRng,
}

impl SystemEntropy {
    pub fn new() -> Self {
        SystemEntropy { rng: OsRng }
    }
}

impl EntropySource for SystemEntropy {
    fn timestamp_nanos(&mut self) -> u128 {
        // A clock set before 1970 still yields a usable, if low, value.
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos(),
            Err(err) => err.duration().as_nanos(),
        }
    }

    fn random_bytes(&mut self, size: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; size];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}

/// Deterministic entropy for testing
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    nanos: u128,
    bytes: Vec<u8>,
}

impl FixedEntropy {
    pub fn new(nanos: u128, bytes: &[u8]) -> Self {
        FixedEntropy {
            nanos,
            bytes: bytes.to_vec(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn timestamp_nanos(&mut self) -> u128 {
        self.nanos
    }

    fn random_bytes(&mut self, size: usize) -> Vec<u8> {
        // Repeat the pattern when more bytes are asked for than were supplied
        if self.bytes.is_empty() {
            return vec![0u8; size];
        }
        self.bytes.iter().copied().cycle().take(size).collect()
    }
}

/// Build the text that is hashed into the initial digest:
/// decimal seed, decimal nanoseconds, then lowercase hex of the random bytes.
pub fn seed_material(seed: i64, nanos: u128, random: &[u8]) -> String {
    format!("{}{}{}", seed, nanos, hex::encode(random))
}
