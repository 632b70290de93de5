use proptest::prelude::*;

use hashchain_rng::generator::{HashChainGenerator, MAX_SEED, MIN_SEED};
use hashchain_rng::GeneratorError;

proptest! {
    #[test]
    fn prop_seed_range_decides_construction(seed in any::<i64>()) {
        let result = HashChainGenerator::from_digest(seed, [0u8; 32]);
        if (MIN_SEED..=MAX_SEED).contains(&seed) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), GeneratorError::InvalidSeed(seed));
        }
    }

    #[test]
    fn prop_hex_length_is_exact(length in 0usize..300, digest in any::<[u8; 32]>()) {
        let mut generator = HashChainGenerator::from_digest(5000, digest).unwrap();
        let hex = generator.next_hex_string(length);

        prop_assert_eq!(hex.len(), length);
        prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert_eq!(generator.counter(), length.div_ceil(8) as u64);
    }

    #[test]
    fn prop_signed_hex_rejects_negatives(length in i64::MIN..0) {
        let mut generator = HashChainGenerator::from_digest(5000, [9u8; 32]).unwrap();
        let is_invalid_argument = matches!(
            generator.next_hex_string_signed(length),
            Err(GeneratorError::InvalidArgument(_))
        );
        prop_assert!(is_invalid_argument);
        prop_assert_eq!(generator.counter(), 0);
    }

    #[test]
    fn prop_prefix_stability(digest in any::<[u8; 32]>(), short in 1usize..64) {
        // A shorter request reads the same words as the start of a longer one
        let mut a = HashChainGenerator::from_digest(6000, digest).unwrap();
        let mut b = HashChainGenerator::from_digest(6000, digest).unwrap();
        let long = a.next_hex_string(64);
        let prefix = b.next_hex_string(short);
        prop_assert!(long.starts_with(&prefix));
    }
}
