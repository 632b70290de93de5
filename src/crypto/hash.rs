// Hash function abstractions

use sha2::{Digest as _, Sha256};
use sha3::Sha3_256;

/// Width in bytes of every digest the chain carries forward
pub const DIGEST_LEN: usize = 32;

/// A fixed-width chain digest
pub type Digest = [u8; DIGEST_LEN];

/// Trait for hash functions that can drive the chain
pub trait HashFunction {
    /// Hash input data
    fn hash(&self, data: &[u8]) -> Digest;

    /// Get output size in bytes
    fn output_size(&self) -> usize {
        DIGEST_LEN
    }

    /// Short name used in logs and the demo output
    fn name(&self) -> &'static str;
}

/// SHA-256 hash function
#[derive(Debug, Clone, Copy, Default)]
pub struct SHA256;

impl SHA256 {
    pub fn new() -> Self {
        SHA256
    }
}

impl HashFunction for SHA256 {
    fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

/// SHA3-256 hash function
#[derive(Debug, Clone, Copy, Default)]
pub struct SHA3_256;

impl SHA3_256 {
    pub fn new() -> Self {
        SHA3_256
    }
}

impl HashFunction for SHA3_256 {
    fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = Sha3_256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn name(&self) -> &'static str {
        "sha3-256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let digest = SHA256::new().hash(b"abc");
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha3_known_vector() {
        let digest = SHA3_256::new().hash(b"abc");
        assert_eq!(
            hex::encode(digest),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_output_size() {
        assert_eq!(SHA256::new().output_size(), 32);
        assert_eq!(SHA3_256::new().output_size(), 32);
    }
}
