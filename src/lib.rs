pub mod avalanche;
pub mod crypto;
pub mod error;
pub mod generator;
pub mod shared;

pub use error::{GeneratorError, Result};
pub use generator::HashChainGenerator;
pub use shared::SharedGenerator;
