// Avalanche-effect diagnostic: bitwise difference between two output streams

use tracing::debug;

use crate::crypto::hash::HashFunction;
use crate::generator::HashChainGenerator;

/// Width of a generated word in bits
pub const WORD_BITS: u32 = u32::BITS;

/// Number of bit positions in which `a` and `b` differ
pub fn differing_bits(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

/// One paired draw from the two generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvalancheSample {
    pub value_a: u32,
    pub value_b: u32,
    pub differing_bits: u32,
}

impl AvalancheSample {
    pub fn new(value_a: u32, value_b: u32) -> Self {
        AvalancheSample {
            value_a,
            value_b,
            differing_bits: differing_bits(value_a, value_b),
        }
    }

    /// Fraction of the word that flipped, in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        f64::from(self.differing_bits) / f64::from(WORD_BITS)
    }
}

/// Result of comparing two generators step by step
#[derive(Debug, Clone, Default)]
pub struct AvalancheReport {
    samples: Vec<AvalancheSample>,
}

impl AvalancheReport {
    pub fn samples(&self) -> &[AvalancheSample] {
        &self.samples
    }

    pub fn total_differing_bits(&self) -> u64 {
        self.samples.iter().map(|s| u64::from(s.differing_bits)).sum()
    }

    /// Mean number of differing bits per sample; zero for an empty report
    pub fn mean_differing_bits(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.total_differing_bits() as f64 / self.samples.len() as f64
    }

    /// Mean differing bits as a fraction of the word width. Ideal is about 0.5.
    pub fn mean_ratio(&self) -> f64 {
        self.mean_differing_bits() / f64::from(WORD_BITS)
    }
}

/// Draw `iterations` values from each generator and record how far apart they are
pub fn compare<H1, H2>(
    a: &mut HashChainGenerator<H1>,
    b: &mut HashChainGenerator<H2>,
    iterations: usize,
) -> AvalancheReport
where
    H1: HashFunction,
    H2: HashFunction,
{
    let samples: Vec<AvalancheSample> = (0..iterations)
        .map(|_| AvalancheSample::new(a.next_u32(), b.next_u32()))
        .collect();
    let report = AvalancheReport { samples };

    debug!(
        seed_a = a.seed(),
        seed_b = b.seed(),
        iterations,
        mean_bits = report.mean_differing_bits(),
        "avalanche comparison finished"
    );
    report
}
