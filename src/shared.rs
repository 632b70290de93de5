// Thread-safe handle around a single hash chain

use std::sync::Arc;

use parking_lot::Mutex;

use crate::crypto::hash::{HashFunction, SHA256};
use crate::error::Result;
use crate::generator::HashChainGenerator;

/// A generator shared between threads.
///
/// Every operation holds one lock across the read of the digest and counter
/// and their replacement, so concurrent callers never interleave inside a
/// step. Clones refer to the same chain.
pub struct SharedGenerator<H: HashFunction = SHA256> {
    inner: Arc<Mutex<HashChainGenerator<H>>>,
}

impl SharedGenerator<SHA256> {
    pub fn new(seed: i64) -> Result<Self> {
        Ok(Self::from_generator(HashChainGenerator::new(seed)?))
    }
}

impl<H: HashFunction> SharedGenerator<H> {
    pub fn from_generator(generator: HashChainGenerator<H>) -> Self {
        SharedGenerator {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    pub fn next_u32(&self) -> u32 {
        self.inner.lock().next_u32()
    }

    pub fn next_hex_string(&self, length: usize) -> String {
        self.inner.lock().next_hex_string(length)
    }

    pub fn counter(&self) -> u64 {
        self.inner.lock().counter()
    }

    /// Run several operations as one uninterrupted sequence
    pub fn with_generator<R>(&self, f: impl FnOnce(&mut HashChainGenerator<H>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl<H: HashFunction> Clone for SharedGenerator<H> {
    fn clone(&self) -> Self {
        SharedGenerator {
            inner: Arc::clone(&self.inner),
        }
    }
}
