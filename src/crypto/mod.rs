pub mod entropy;
pub mod hash;

pub use entropy::{EntropySource, FixedEntropy, SystemEntropy};
pub use hash::{Digest, HashFunction, DIGEST_LEN, SHA256, SHA3_256};
