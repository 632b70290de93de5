// Hash-chain pseudo-random generator
//
// Every step hashes the previous digest together with a big-endian step
// counter; the new digest replaces the old one and its leading four bytes
// become the emitted value.

use std::fmt;

use rand::RngCore;
use tracing::{debug, trace};

use crate::crypto::entropy::{seed_material, EntropySource, SystemEntropy, OS_ENTROPY_BYTES};
use crate::crypto::hash::{Digest, HashFunction, DIGEST_LEN, SHA256};
use crate::error::{GeneratorError, Result};

/// Smallest seed accepted at construction
pub const MIN_SEED: i64 = 1000;
/// Largest seed accepted at construction
pub const MAX_SEED: i64 = 9999;
/// Length of a hex string when the caller does not ask for one
pub const DEFAULT_HEX_LENGTH: usize = 32;

const WORD_HEX_CHARS: usize = 8;
const COUNTER_LEN: usize = 8;

/// Check that a seed lies in `MIN_SEED..=MAX_SEED`
pub fn validate_seed(seed: i64) -> Result<i64> {
    if (MIN_SEED..=MAX_SEED).contains(&seed) {
        Ok(seed)
    } else {
        Err(GeneratorError::InvalidSeed(seed))
    }
}

/// Bytes needed to hold `length` hex characters rounded up to whole words
fn hex_buffer_capacity(length: usize) -> usize {
    length.div_ceil(WORD_HEX_CHARS).saturating_mul(WORD_HEX_CHARS)
}

/// Pseudo-random generator advanced solely by repeated hashing.
///
/// The state is the user seed (kept for reference only), a step counter and
/// the most recent digest. Operations take `&mut self`; wrap the generator in
/// [`crate::shared::SharedGenerator`] when several threads need the same chain.
pub struct HashChainGenerator<H: HashFunction = SHA256> {
    seed: i64,
    counter: u64,
    digest: Digest,
    hasher: H,
}

impl HashChainGenerator<SHA256> {
    /// Seed a SHA-256 chain from `seed`, the wall clock and the OS CSPRNG
    pub fn new(seed: i64) -> Result<Self> {
        Self::with_hasher(seed, SHA256::new())
    }

    /// Seed a SHA-256 chain reading time and random bytes from `source`
    pub fn with_entropy<E: EntropySource>(seed: i64, source: &mut E) -> Result<Self> {
        Self::with_hasher_and_entropy(seed, SHA256::new(), source)
    }

    /// Start a SHA-256 chain from an explicit initial digest.
    ///
    /// No time or OS entropy is read, so the output stream is fully
    /// determined by `digest`.
    pub fn from_digest(seed: i64, digest: Digest) -> Result<Self> {
        Self::from_digest_with_hasher(seed, digest, SHA256::new())
    }
}

impl<H: HashFunction> HashChainGenerator<H> {
    pub fn with_hasher(seed: i64, hasher: H) -> Result<Self> {
        Self::with_hasher_and_entropy(seed, hasher, &mut SystemEntropy::new())
    }

    pub fn with_hasher_and_entropy<E: EntropySource>(
        seed: i64,
        hasher: H,
        source: &mut E,
    ) -> Result<Self> {
        let seed = validate_seed(seed)?;

        let nanos = source.timestamp_nanos();
        let random = source.random_bytes(OS_ENTROPY_BYTES);
        let material = seed_material(seed, nanos, &random);
        let digest = hasher.hash(material.as_bytes());

        debug!(seed, hash = hasher.name(), "seeded hash chain from entropy");
        Ok(Self::from_parts(seed, digest, hasher))
    }

    pub fn from_digest_with_hasher(seed: i64, digest: Digest, hasher: H) -> Result<Self> {
        let seed = validate_seed(seed)?;
        debug!(seed, hash = hasher.name(), "seeded hash chain from explicit digest");
        Ok(Self::from_parts(seed, digest, hasher))
    }

    fn from_parts(seed: i64, digest: Digest, hasher: H) -> Self {
        HashChainGenerator {
            seed,
            counter: 0,
            digest,
            hasher,
        }
    }

    /// The seed this generator was built with
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of 32-bit values generated so far
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Advance the chain by one step and return the next 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    /// Emit exactly `length` lowercase hex characters.
    ///
    /// Whole 32-bit words are drawn and formatted as eight zero-padded hex
    /// digits each; the tail of the last word is cut off when `length` is not
    /// a multiple of eight.
    pub fn next_hex_string(&mut self, length: usize) -> String {
        if length == 0 {
            return String::new();
        }

        let mut out = String::with_capacity(hex_buffer_capacity(length));
        while out.len() < length {
            out.push_str(&format!("{:08x}", self.advance()));
        }
        out.truncate(length);
        out
    }

    pub fn next_hex_string_default(&mut self) -> String {
        self.next_hex_string(DEFAULT_HEX_LENGTH)
    }

    /// Hex emission for callers holding a signed length, e.g. parsed user input
    pub fn next_hex_string_signed(&mut self, length: i64) -> Result<String> {
        let length = usize::try_from(length).map_err(|_| {
            GeneratorError::InvalidArgument(format!("hex length must be non-negative, got {length}"))
        })?;
        Ok(self.next_hex_string(length))
    }

    fn advance(&mut self) -> u32 {
        let mut buffer = [0u8; DIGEST_LEN + COUNTER_LEN];
        buffer[..DIGEST_LEN].copy_from_slice(&self.digest);
        buffer[DIGEST_LEN..].copy_from_slice(&self.counter.to_be_bytes());

        self.digest = self.hasher.hash(&buffer);
        self.counter += 1;
        trace!(counter = self.counter, "advanced hash chain");

        u32::from_be_bytes([self.digest[0], self.digest[1], self.digest[2], self.digest[3]])
    }
}

impl<H: HashFunction> fmt::Debug for HashChainGenerator<H> {
    // The digest is the whole secret state; keep it out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashChainGenerator")
            .field("seed", &self.seed)
            .field("counter", &self.counter)
            .field("hash", &self.hasher.name())
            .finish_non_exhaustive()
    }
}

impl<H: HashFunction> RngCore for HashChainGenerator<H> {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.advance());
        let low = u64::from(self.advance());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.advance().to_be_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
